//! Parse Command
//!
//! Prints the intermediate representation of one standard as JSON.
//!
//! Usage:
//!   aiyaml parse core/testing-standards.md

use std::fs;
use std::path::Path;

use crate::cli::util::CommandContext;
use crate::parser;
use crate::types::{Result, ResultExt};

/// Pretty JSON for the parsed form of `text`
pub fn render(text: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&parser::parse(text))?)
}

pub fn run(ctx: &CommandContext, file: &Path) -> Result<()> {
    let path = ctx.resolve(file);
    let text = fs::read_to_string(&path).with_path(&path, "Could not read source")?;
    println!("{}", render(&text)?);
    Ok(())
}
