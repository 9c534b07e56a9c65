//! Config Command
//!
//! Inspect and initialize aiyaml configuration.
//!
//! Usage:
//!   aiyaml config show [-f json]
//!   aiyaml config path
//!   aiyaml config init [-g] [--force]

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the effective configuration (merged from all sources)
pub fn show(ctx: &CommandContext, format: &str) -> Result<()> {
    let rendered = ConfigLoader::render(&ctx.config, format == "json")?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Show configuration paths
pub fn path(ctx: &CommandContext) -> Result<()> {
    ConfigLoader::show_path(&ctx.project_root);
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let path = ConfigLoader::init_global(force)?;
    Output::new().success("Initialized global configuration");
    println!("  Config: {}", path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = ConfigLoader::init_project(&ctx.project_root, force)?;
    Output::new().success("Initialized project configuration");
    println!("  Config: {}", path.display());
    Ok(())
}
