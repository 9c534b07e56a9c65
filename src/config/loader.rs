//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/aiyaml/config.toml)
//! 3. Project config (.aiyaml/config.toml)
//! 4. Environment variables (AIYAML_* prefix, `__` separates nesting)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{ConvertError, Result, ResultExt};

const APP_DIR: &str = "aiyaml";
const PROJECT_DIR: &str = ".aiyaml";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "AIYAML_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project directory:
    /// defaults → global → project → `extra` file → env vars
    pub fn load_for(project_root: &Path, extra: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = project_root.join(Self::project_config_path());
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = extra {
            if !path.exists() {
                return Err(ConvertError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // e.g. AIYAML_CONVERSION__MAX_RULES -> conversion.max_rules
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConvertError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ConvertError::Config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/aiyaml/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Project config file, relative to the project root
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join(CONFIG_FILE)
    }

    /// Project config directory, relative to the project root
    pub fn project_dir() -> PathBuf {
        PathBuf::from(PROJECT_DIR)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path(project_root: &Path) {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = project_root.join(Self::project_config_path());
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render an effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| ConvertError::Config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            ConvertError::Config("Cannot determine global config directory".to_string())
        })?;
        fs::create_dir_all(&global_dir).with_path(&global_dir, "Could not create directory")?;

        let config_path = global_dir.join(CONFIG_FILE);
        Self::write_default(&config_path, force, Self::default_global_config())?;
        Ok(config_path)
    }

    /// Initialize project configuration under `project_root`
    pub fn init_project(project_root: &Path, force: bool) -> Result<PathBuf> {
        let project_dir = project_root.join(Self::project_dir());
        fs::create_dir_all(&project_dir).with_path(&project_dir, "Could not create directory")?;

        let config_path = project_dir.join(CONFIG_FILE);
        Self::write_default(&config_path, force, Self::default_project_config())?;
        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_default(path: &Path, force: bool, content: &str) -> Result<()> {
        if !path.exists() || force {
            fs::write(path, content).with_path(path, "Could not write config")?;
            info!("Created config: {}", path.display());
        } else {
            info!("Config exists: {}", path.display());
        }
        Ok(())
    }

    /// Default global config content (TOML)
    fn default_global_config() -> &'static str {
        r#"# aiyaml Global Configuration
# User-wide defaults. Project settings in .aiyaml/config.toml override these.

version = "1.0"

[output]
preserve_manual = true
include_header = true

[conversion]
workers = 0
"#
    }

    /// Default project config content (TOML)
    fn default_project_config() -> &'static str {
        r#"# aiyaml Project Configuration
# Project-specific settings that override global defaults.

version = "1.0"

[source]
root = "."
core_dir = "core"
locales_dir = "locales"
locales = ["zh-TW", "zh-CN"]

[output]
default_dir = "ai/standards"
preserve_manual = true
include_header = true

[conversion]
max_rules = 15
text_cap = 200
workers = 0
"#
    }
}
