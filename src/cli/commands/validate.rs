//! Validate Command
//!
//! Checks that generated `.ai.yaml` files are well formed: each must parse
//! as YAML, be a mapping, and carry a non-empty `id` and a `meta` mapping.
//!
//! Usage:
//!   aiyaml validate [DIR] [--format json]

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

use crate::cli::ui::{Output, Tally};
use crate::cli::util::CommandContext;
use crate::discovery::DocumentScanner;
use crate::types::{ConvertError, Result, ResultExt};

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub directory: String,
    pub files: Vec<FileReport>,
    pub valid: usize,
    pub invalid: usize,
}

/// Check one generated file and return its document id
pub fn validate_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).with_path(path, "Could not read file")?;
    validate_text(path, &text)
}

pub fn validate_text(path: &Path, text: &str) -> Result<String> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| ConvertError::validation(path, format!("not valid YAML ({})", e)))?;

    let Value::Mapping(root) = value else {
        return Err(ConvertError::validation(path, "top level is not a mapping"));
    };

    let id = match root.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        Some(_) => return Err(ConvertError::validation(path, "'id' is not a non-empty string")),
        None => return Err(ConvertError::validation(path, "missing 'id'")),
    };

    match root.get("meta") {
        Some(Value::Mapping(_)) => Ok(id),
        Some(_) => Err(ConvertError::validation(path, "'meta' is not a mapping")),
        None => Err(ConvertError::validation(path, "missing 'meta'")),
    }
}

/// Validate every `.ai.yaml` file below `dir`
pub fn execute(dir: &Path) -> Result<ValidationReport> {
    let files = DocumentScanner::outputs(dir).scan()?;
    let mut report = ValidationReport {
        directory: dir.display().to_string(),
        ..Default::default()
    };

    for relative in files {
        let result = validate_file(&dir.join(&relative));
        debug!(file = %relative.display(), ok = result.is_ok(), "Validated");
        let path = relative.display().to_string();
        report.files.push(match result {
            Ok(id) => {
                report.valid += 1;
                FileReport {
                    path,
                    valid: true,
                    id: Some(id),
                    error: None,
                }
            }
            Err(e) => {
                report.invalid += 1;
                FileReport {
                    path,
                    valid: false,
                    id: None,
                    error: Some(e.to_string()),
                }
            }
        });
    }
    Ok(report)
}

pub fn run(ctx: &CommandContext, dir: Option<&Path>, format: &str) -> Result<()> {
    let dir = dir.map_or_else(|| ctx.root().to_path_buf(), |d| ctx.resolve(d));
    let report = execute(&dir)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let output = Output::new();
        output.header(&format!("Validating {}", report.directory));
        if report.files.is_empty() {
            output.warning("No .ai.yaml files found");
        }
        for file in &report.files {
            match (&file.id, &file.error) {
                (Some(id), _) => output.success(&format!("{} ({})", file.path, id)),
                (_, Some(error)) => output.error(error),
                _ => {}
            }
        }
        output.tally(&Tally {
            ok: report.valid,
            failed: report.invalid,
            skipped: 0,
        });
    }

    if report.invalid > 0 {
        return Err(ConvertError::validation(
            &dir,
            format!("{} of {} file(s) invalid", report.invalid, report.files.len()),
        ));
    }
    Ok(())
}
