//! Unified Error Type System
//!
//! Centralized error type for the conversion pipeline and its drivers.
//!
//! ## Failure Classes
//!
//! - **Generation**: an invariant of the output document was violated
//! - **Serialization**: a value cannot be written by the YAML writer
//! - **Io / Source**: a source or destination could not be read or written
//! - **Validation**: an existing `.ai.yaml` file is not well formed
//!
//! Degraded Markdown (missing sections, malformed tables) is never an error.
//! The parser returns empty collections instead.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Pipeline Errors
    // -------------------------------------------------------------------------
    /// Output document invariant violated while assembling the IR
    #[error("Generation error for '{id}': {message}")]
    Generation { id: String, message: String },

    /// Value not representable by the minimal YAML writer
    #[error("YAML serialization error at '{path}': {message}")]
    Serialization { path: String, message: String },

    /// Source or destination file could not be read or written
    #[error("{message}: {path}")]
    Source { path: String, message: String },

    /// Worker task ended without producing a result
    #[error("Worker task failed: {0}")]
    Join(String),

    // -------------------------------------------------------------------------
    // Driver Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid AI-YAML in {path}: {message}")]
    Validation { path: String, message: String },

    #[error("{count} output file(s) are out of date")]
    Drift { count: usize },

    #[error("{failed} of {total} document(s) failed to convert")]
    Batch { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl ConvertError {
    /// Create a generation error
    pub fn generation(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a source error tied to a file path
    pub fn source(path: &Path, message: impl Into<String>) -> Self {
        Self::Source {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a validation error tied to a file path
    pub fn validation(path: &Path, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

/// Context extension trait for attaching a file path to I/O failures
pub trait ResultExt<T> {
    /// Wrap the error as a [`ConvertError::Source`] with the given action
    fn with_path(self, path: &Path, action: &str) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, action: &str) -> Result<T> {
        self.map_err(|e| ConvertError::source(path, format!("{} ({})", action, e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
