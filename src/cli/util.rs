//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::types::{ConvertError, Result, ResultExt};

/// Command execution context
///
/// Created once in `main` and handed to every command handler.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration, with `source.root` resolved against `project_root`
    pub config: Config,
    /// Directory the command was started in
    pub project_root: PathBuf,
    /// `YYYY-MM-DD` used for documents without a `Last Updated` field
    pub today: String,
}

impl CommandContext {
    /// Load config for the current directory, layering `extra` on top
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let project_root = std::env::current_dir().map_err(ConvertError::Io)?;
        Self::load_in(&project_root, extra)
    }

    pub fn load_in(project_root: &Path, extra: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load_for(project_root, extra)?;
        Ok(Self::new(project_root, config, today()))
    }

    pub fn new(project_root: &Path, mut config: Config, today: impl Into<String>) -> Self {
        config.source.root = project_root.join(&config.source.root);
        Self {
            config,
            project_root: project_root.to_path_buf(),
            today: today.into(),
        }
    }

    /// Repository root the source and output paths are relative to
    pub fn root(&self) -> &Path {
        &self.config.source.root
    }

    /// Resolve a path given on the command line
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }
}

/// Local date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Read a file that may legitimately be absent
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_path(path, "Could not read file"),
    }
}

/// Path of `path` below `root`, falling back to `path` itself
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
