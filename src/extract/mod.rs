//! Rule & Reference Extractor
//!
//! Walks a [`ParsedDocument`] and derives the machine-actionable parts of
//! the output: rules, table-backed quick references and the option
//! decision matrix.

mod options;
mod quick_reference;
mod rules;

use indexmap::IndexMap;
use tracing::debug;

use crate::classify::ClassificationRules;
use crate::config::Config;
use crate::constants::extract::{MAX_RULES, TEXT_CAP};
use crate::types::{OptionSet, ParsedDocument, QuickReference, Rule};

pub use rules::clean_instruction;

/// Size limits applied during extraction and assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_rules: usize,
    pub text_cap: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rules: MAX_RULES,
            text_cap: TEXT_CAP,
        }
    }
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Self {
            max_rules: config.conversion.max_rules,
            text_cap: config.conversion.text_cap,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub rules: Vec<Rule>,
    pub quick_reference: IndexMap<String, QuickReference>,
    pub choices: Option<OptionSet>,
}

/// Extract rules, quick references and options for document `standard_id`
pub fn extract(
    doc: &ParsedDocument,
    standard_id: &str,
    classification: &ClassificationRules,
    limits: Limits,
) -> Extracted {
    let extracted = Extracted {
        rules: rules::extract(doc, standard_id, classification, limits.max_rules),
        quick_reference: quick_reference::extract(&doc.tables),
        choices: options::extract(doc, classification),
    };

    debug!(
        id = standard_id,
        rules = extracted.rules.len(),
        quick_reference = extracted.quick_reference.len(),
        options = extracted.choices.is_some(),
        "Extracted content"
    );

    extracted
}
