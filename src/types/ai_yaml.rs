//! AI-YAML Output IR
//!
//! Closed, strongly typed shape of a generated document. Absent parts are
//! `None` or empty collections; the serializer decides presence by pattern
//! matching on these fields rather than on an open map.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::types::{ConvertError, Result};

/// Top-level keys that structured section content may never shadow
pub const RESERVED_KEYS: &[&str] = &["id", "meta", "rules", "quick_reference", "decision", "options"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiYamlDocument {
    pub id: String,
    pub meta: Meta,
    /// Section key → subsection key → value, in source order
    pub structured: IndexMap<String, IndexMap<String, StructuredValue>>,
    pub rules: Vec<Rule>,
    pub quick_reference: IndexMap<String, QuickReference>,
    /// Decision matrix and option files, always produced together
    pub choices: Option<OptionSet>,
}

impl AiYamlDocument {
    /// Check the invariants the serializer relies on
    pub fn validate(&self, max_rules: usize) -> Result<()> {
        if self.id.is_empty() {
            return Err(ConvertError::generation(&self.id, "document id is empty"));
        }
        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConvertError::generation(
                &self.id,
                "document id is not kebab-case",
            ));
        }
        if self.meta.version.is_empty() {
            return Err(ConvertError::generation(&self.id, "meta.version is empty"));
        }
        if self.rules.len() > max_rules {
            return Err(ConvertError::generation(
                &self.id,
                format!("{} rules exceed the cap of {}", self.rules.len(), max_rules),
            ));
        }
        if let Some(rule) = self.rules.iter().find(|r| r.instruction.is_empty()) {
            return Err(ConvertError::generation(
                &self.id,
                format!("rule '{}' has an empty instruction", rule.id),
            ));
        }
        if let Some(set) = &self.choices
            && set.decision.matrix.is_empty()
        {
            return Err(ConvertError::generation(
                &self.id,
                "decision matrix has no entries",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub version: String,
    pub updated: String,
    /// Repository-relative path of the source Markdown
    pub source: String,
    pub description: String,
    pub language: Option<String>,
}

/// Value extracted from a subsection body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructuredValue {
    /// Bullet items
    List(Vec<String>),
    /// Body of the first fenced code block
    Code(String),
    /// Whitespace-collapsed text, truncated
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: String,
    pub trigger: String,
    pub instruction: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Required,
    #[default]
    Recommended,
    Optional,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReference {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    pub decision: Decision,
    pub options: OptionsBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub question: String,
    pub matrix: Vec<DecisionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionEntry {
    pub answer: String,
    pub select: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsBlock {
    /// Category key, e.g. `commit_language`
    pub category: String,
    pub default: String,
    pub choices: Vec<OptionFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionFile {
    pub id: String,
    pub file: String,
}
