//! Conversion Pipeline
//!
//! One unit of work: parse → extract → emit → render → merge manual block.
//! A [`Converter`] holds no per-file state and is shared by every unit of a
//! batch.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::classify::ClassificationRules;
use crate::config::Config;
use crate::emitter::{self, ConversionContext};
use crate::extract::{self, Limits};
use crate::manual::{extract_manual, merge_manual};
use crate::parser;
use crate::types::{ConvertError, Result};

/// A source document and, when one exists, its previous output
#[derive(Debug, Clone)]
pub struct ConversionInput {
    /// Path relative to the repository root, e.g. `core/testing-standards.md`
    pub relative_path: PathBuf,
    pub text: String,
    pub prior: Option<String>,
}

/// Result of one successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub id: String,
    /// Destination relative to the repository root
    pub output_path: PathBuf,
    pub rendered: String,
    /// A manual block from the prior output was carried over
    pub manual_preserved: bool,
}

#[derive(Debug, Clone)]
pub struct ConverterOptions {
    pub preserve_manual: bool,
    pub include_header: bool,
    pub limits: Limits,
    /// `YYYY-MM-DD` fallback for `meta.updated`
    pub today: String,
}

impl ConverterOptions {
    pub fn from_config(config: &Config, today: impl Into<String>) -> Self {
        Self {
            preserve_manual: config.output.preserve_manual,
            include_header: config.output.include_header,
            limits: Limits::from(config),
            today: today.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Converter {
    rules: ClassificationRules,
    options: ConverterOptions,
}

impl Converter {
    pub fn new(rules: ClassificationRules, options: ConverterOptions) -> Self {
        Self { rules, options }
    }

    pub fn from_config(config: &Config, today: impl Into<String>) -> Self {
        Self::new(
            ClassificationRules::from_config(config),
            ConverterOptions::from_config(config, today),
        )
    }

    fn filename(relative_path: &Path) -> Result<String> {
        relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ConvertError::source(relative_path, "Source path has no file name"))
    }

    /// Document id and destination for a source path, without reading it
    pub fn plan(&self, relative_path: &Path) -> Result<(String, PathBuf)> {
        let id = self.rules.standard_id(&Self::filename(relative_path)?);
        let output_path = self.rules.output_path(relative_path, &id);
        Ok((id, output_path))
    }

    pub fn context_for(&self, relative_path: &Path) -> Result<ConversionContext> {
        Ok(ConversionContext {
            filename: Self::filename(relative_path)?,
            locale: self.rules.locale_of(relative_path),
            today: self.options.today.clone(),
        })
    }

    pub fn convert(&self, input: &ConversionInput) -> Result<Conversion> {
        let context = self.context_for(&input.relative_path)?;
        let (id, output_path) = self.plan(&input.relative_path)?;

        if let Some(locale) = context.locale.as_deref()
            && !self.rules.is_routed_locale(locale)
        {
            warn!(
                source = %input.relative_path.display(),
                locale,
                output = %output_path.display(),
                "Locale has no configured output directory"
            );
        }

        let parsed = parser::parse(&input.text);
        let extracted = extract::extract(&parsed, &id, &self.rules, self.options.limits);
        let doc = emitter::emit(&parsed, extracted, &context, &self.rules, self.options.limits)?;
        let generated = emitter::render(&doc, self.options.include_header)?;

        let manual = input
            .prior
            .as_deref()
            .filter(|_| self.options.preserve_manual)
            .map(extract_manual)
            .filter(|m| m.has_content());

        let (rendered, manual_preserved) = match manual {
            Some(section) => (merge_manual(&generated, &section.content), true),
            None => (generated, false),
        };

        debug!(
            id = %id,
            output = %output_path.display(),
            manual = manual_preserved,
            "Converted document"
        );

        Ok(Conversion {
            id,
            output_path,
            rendered,
            manual_preserved,
        })
    }
}
