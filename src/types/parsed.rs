//! Parsed Markdown IR
//!
//! Output of the structural parser. Built once per source file and
//! discarded after the AI-YAML document has been produced.

use serde::Serialize;

/// Complete structure parsed from a standards document
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedDocument {
    pub metadata: Metadata,
    /// Body of the `## Purpose` section, empty when absent
    pub purpose: String,
    pub sections: Vec<Section>,
    pub tables: Vec<Table>,
    pub code_blocks: Vec<CodeBlock>,
    pub decision_points: Vec<DecisionPoint>,
    pub related_standards: Vec<RelatedStandard>,
    pub version_history: Vec<VersionEntry>,
}

impl ParsedDocument {
    /// First decision point listing explicit options, if any
    pub fn options_decision(&self) -> Option<&[OptionChoice]> {
        self.decision_points.iter().find_map(|d| match d {
            DecisionPoint::Options { options } => Some(options.as_slice()),
            DecisionPoint::ChooseOne { .. } => None,
        })
    }
}

/// Header metadata read from the first lines of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub version: String,
    pub updated: String,
    pub applicability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_link: Option<LanguageLink>,
}

/// `> **Language**: English | [繁體中文](../locales/...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLink {
    pub text: String,
    pub path: String,
}

/// A level-2 section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub content: String,
    pub kind: SectionKind,
    pub subsections: Vec<Subsection>,
}

/// A level-3 section scoped to its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Purpose,
    VersionHistory,
    RelatedStandards,
    References,
    License,
    AntiPatterns,
    Examples,
    Configuration,
    TableContent,
    DecisionPoint,
    Generic,
}

impl SectionKind {
    /// Sections that carry document metadata rather than content
    pub fn is_metadata(self) -> bool {
        matches!(
            self,
            Self::VersionHistory | Self::References | Self::License | Self::RelatedStandards
        )
    }
}

/// A pipe-delimited table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Nearest preceding heading text, empty when none is close enough
    pub context: String,
    pub raw: String,
}

/// A fenced code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Info string, `text` when the fence has none
    pub language: String,
    pub content: String,
    /// Nearest preceding non-blank line
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DecisionPoint {
    /// `PROJECT MUST CHOOSE ONE <TOPIC>`
    ChooseOne { topic: String, context: String },
    /// Run of `### Option A: ...` headings
    Options { options: Vec<OptionChoice> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChoice {
    /// Option letter (`A`, `B`, `C`)
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedStandard {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub version: String,
    pub date: String,
    pub changes: String,
}
