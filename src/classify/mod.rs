//! Classification Rules
//!
//! Read-only lookup tables and inference rules shared by the extractor and
//! the emitter. A [`ClassificationRules`] value is built once per run and
//! passed down explicitly; nothing here mutates after construction.

pub mod ids;
pub mod paths;
pub mod priority;
pub mod triggers;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::output::FILE_SUFFIX;
use crate::types::Priority;
use paths::OutputRule;

#[derive(Debug, Clone)]
pub struct ClassificationRules {
    standard_ids: &'static [(&'static str, &'static str)],
    section_keys: &'static [(&'static str, &'static str)],
    triggers: &'static [(&'static str, &'static str)],
    output_rules: Vec<OutputRule>,
    default_dir: String,
    core_dir: String,
    locales_dir: String,
    locales: Vec<String>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ClassificationRules {
    /// Built-in tables plus output rules for the configured layout
    pub fn from_config(config: &Config) -> Self {
        let source = &config.source;
        Self {
            standard_ids: ids::STANDARD_IDS,
            section_keys: ids::SECTION_KEYS,
            triggers: triggers::TRIGGERS,
            output_rules: paths::output_rules(
                &source.core_dir,
                &source.locales_dir,
                &source.locales,
                &config.output.default_dir,
            ),
            default_dir: config.output.default_dir.clone(),
            core_dir: source.core_dir.clone(),
            locales_dir: source.locales_dir.clone(),
            locales: source.locales.clone(),
        }
    }

    pub fn standard_id(&self, filename: &str) -> String {
        ids::standard_id(self.standard_ids, filename)
    }

    pub fn section_key(&self, section_name: &str) -> String {
        ids::section_key(self.section_keys, section_name)
    }

    pub fn trigger(&self, standard_id: &str, section_name: &str) -> &'static str {
        triggers::trigger(self.triggers, standard_id, section_name)
    }

    pub fn priority(&self, text: &str) -> Priority {
        priority::infer(text)
    }

    pub fn option_category(&self, title: &str) -> &'static str {
        triggers::option_category(title)
    }

    pub fn locale_of(&self, relative_path: &Path) -> Option<String> {
        paths::locale_of(&self.locales_dir, relative_path)
    }

    /// Locale with its own output directory rule
    pub fn is_routed_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn source_path(&self, filename: &str, locale: Option<&str>) -> String {
        paths::source_path(&self.core_dir, &self.locales_dir, filename, locale)
    }

    pub fn output_dir(&self, relative_path: &Path) -> &str {
        paths::output_dir(&self.output_rules, relative_path, &self.default_dir)
    }

    /// `<output_dir>/<id>.ai.yaml`, relative to the repository root
    pub fn output_path(&self, relative_path: &Path, id: &str) -> PathBuf {
        Path::new(self.output_dir(relative_path)).join(format!("{}{}", id, FILE_SUFFIX))
    }
}
