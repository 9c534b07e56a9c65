//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/aiyaml/) and project (.aiyaml/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{extract, output};
use crate::types::{ConvertError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Where source standards live
    pub source: SourceConfig,

    /// Where generated files go
    pub output: OutputConfig,

    /// Extraction limits and batch parallelism
    pub conversion: ConversionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            conversion: ConversionConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ConvertError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.conversion.max_rules == 0 {
            return Err(ConvertError::Config(
                "conversion.max_rules must be greater than 0".to_string(),
            ));
        }

        if self.conversion.text_cap == 0 {
            return Err(ConvertError::Config(
                "conversion.text_cap must be greater than 0".to_string(),
            ));
        }

        if self.output.default_dir.trim().is_empty() {
            return Err(ConvertError::Config(
                "output.default_dir must not be empty".to_string(),
            ));
        }

        if self.source.core_dir.trim().is_empty() || self.source.locales_dir.trim().is_empty() {
            return Err(ConvertError::Config(
                "source.core_dir and source.locales_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Worker count for batch conversion, resolving `0` to the host parallelism
    pub fn effective_workers(&self) -> usize {
        match self.conversion.workers {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

// =============================================================================
// Source Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Repository root that relative source paths are resolved against
    pub root: PathBuf,

    /// Directory holding the generic standards
    pub core_dir: String,

    /// Parent of the `<locale>/<core_dir>` directories
    pub locales_dir: String,

    /// Locales with translated standards
    pub locales: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            core_dir: "core".to_string(),
            locales_dir: "locales".to_string(),
            locales: vec!["zh-TW".to_string(), "zh-CN".to_string()],
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generic standards, mirrored under each locale
    pub default_dir: String,

    /// Carry manual additions over from the previous output
    pub preserve_manual: bool,

    /// Write the two-line `# <Title> - AI Optimized` header
    pub include_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_dir: output::DEFAULT_DIR.to_string(),
            preserve_manual: true,
            include_header: true,
        }
    }
}

// =============================================================================
// Conversion Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Maximum rules kept per document
    pub max_rules: usize,

    /// Character cap for free-text structured values
    pub text_cap: usize,

    /// Concurrent conversions (0 = available parallelism)
    pub workers: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_rules: extract::MAX_RULES,
            text_cap: extract::TEXT_CAP,
            workers: 0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.output.default_dir, "ai/standards");
        assert_eq!(config.conversion.max_rules, 15);
        assert_eq!(config.source.locales, vec!["zh-TW", "zh-CN"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.conversion.max_rules = 0;
        assert!(matches!(config.validate(), Err(ConvertError::Config(_))));

        let mut config = Config::default();
        config.conversion.text_cap = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.default_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_workers() {
        let mut config = Config::default();
        assert!(config.effective_workers() >= 1);
        config.conversion.workers = 3;
        assert_eq!(config.effective_workers(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[conversion]\nmax_rules = 5\n").unwrap();
        assert_eq!(config.conversion.max_rules, 5);
        assert_eq!(config.conversion.text_cap, 200);
        assert!(config.output.preserve_manual);
    }
}
