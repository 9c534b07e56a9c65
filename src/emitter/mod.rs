//! Emitter
//!
//! [`emit`] assembles an [`AiYamlDocument`]; [`render`] turns it into text.
//! Top-level key order is fixed: `id`, `meta`, structured sections,
//! `rules`, `quick_reference`, `decision`, `options`. Empty collections are
//! left out, meta fields never are.

mod assemble;
pub mod yaml;

use serde::Serialize;

use crate::types::{AiYamlDocument, OptionSet, QuickReference, Result, Rule, StructuredValue};
use yaml::Node;

pub use assemble::{emit, subsection_value};

/// Per-file inputs that are not part of the document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionContext {
    /// Source file name, e.g. `commit-message-guide.md`
    pub filename: String,
    pub locale: Option<String>,
    /// `YYYY-MM-DD` used when the document has no `Last Updated` field
    pub today: String,
}

/// Serialize a document, optionally preceded by the two-line header comment
pub fn render(doc: &AiYamlDocument, include_header: bool) -> Result<String> {
    let body = yaml::to_string(&document_node(doc))?;
    if !include_header {
        return Ok(body);
    }
    Ok(format!(
        "# {} - AI Optimized\n# Source: {}\n\n{}",
        header_title(&doc.id),
        doc.meta.source,
        body
    ))
}

/// `commit-message` → `Commit message`
pub fn header_title(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect::<String>()
            .replace('-', " "),
        None => String::new(),
    }
}

// =============================================================================
// IR → Node
// =============================================================================

fn entry(key: &str, value: Node) -> (String, Node) {
    (key.to_string(), value)
}

pub fn document_node(doc: &AiYamlDocument) -> Node {
    let meta = &doc.meta;
    let mut meta_entries = vec![
        entry("version", Node::scalar(&meta.version)),
        entry("updated", Node::scalar(&meta.updated)),
        entry("source", Node::scalar(&meta.source)),
        entry("description", Node::scalar(&meta.description)),
    ];
    if let Some(language) = &meta.language {
        meta_entries.push(entry("language", Node::scalar(language)));
    }

    let mut root = vec![
        entry("id", Node::scalar(&doc.id)),
        entry("meta", Node::Map(meta_entries)),
    ];

    for (key, subsections) in &doc.structured {
        let values = subsections
            .iter()
            .map(|(sub_key, value)| (sub_key.clone(), structured_node(value)))
            .collect();
        root.push((key.clone(), Node::Map(values)));
    }

    if !doc.rules.is_empty() {
        root.push(entry("rules", Node::Seq(doc.rules.iter().map(rule_node).collect())));
    }

    if !doc.quick_reference.is_empty() {
        let tables = doc
            .quick_reference
            .iter()
            .map(|(key, table)| (key.clone(), table_node(table)))
            .collect();
        root.push(entry("quick_reference", Node::Map(tables)));
    }

    if let Some(set) = &doc.choices {
        root.extend(option_nodes(set));
    }

    Node::Map(root)
}

fn structured_node(value: &StructuredValue) -> Node {
    match value {
        StructuredValue::List(items) => Node::strings(items.iter().cloned()),
        StructuredValue::Code(text) | StructuredValue::Text(text) => Node::scalar(text),
    }
}

fn rule_node(rule: &Rule) -> Node {
    Node::Map(vec![
        entry("id", Node::scalar(&rule.id)),
        entry("trigger", Node::scalar(&rule.trigger)),
        entry("instruction", Node::scalar(&rule.instruction)),
        entry("priority", Node::scalar(rule.priority.as_str())),
    ])
}

fn table_node(table: &QuickReference) -> Node {
    Node::Map(vec![
        entry("columns", Node::strings(table.columns.iter().cloned())),
        entry(
            "rows",
            Node::Seq(
                table
                    .rows
                    .iter()
                    .map(|row| Node::strings(row.iter().cloned()))
                    .collect(),
            ),
        ),
    ])
}

fn option_nodes(set: &OptionSet) -> [(String, Node); 2] {
    let decision = Node::Map(vec![
        entry("question", Node::scalar(&set.decision.question)),
        entry(
            "matrix",
            Node::Seq(
                set.decision
                    .matrix
                    .iter()
                    .map(|m| {
                        Node::Map(vec![
                            entry("answer", Node::scalar(&m.answer)),
                            entry("select", Node::scalar(&m.select)),
                        ])
                    })
                    .collect(),
            ),
        ),
    ]);

    let block = &set.options;
    let choices = block
        .choices
        .iter()
        .map(|c| {
            Node::Map(vec![
                entry("id", Node::scalar(&c.id)),
                entry("file", Node::scalar(&c.file)),
            ])
        })
        .collect();
    let options = Node::Map(vec![(
        block.category.clone(),
        Node::Map(vec![
            entry("default", Node::scalar(&block.default)),
            entry("choices", Node::Seq(choices)),
        ]),
    )]);

    [entry("decision", decision), entry("options", options)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Meta, Priority};
    use indexmap::IndexMap;

    fn sample() -> AiYamlDocument {
        let mut quick_reference = IndexMap::new();
        quick_reference.insert(
            "commit-types".to_string(),
            QuickReference {
                columns: vec!["Type".to_string(), "Meaning".to_string()],
                rows: vec![vec!["feat".to_string(), "New feature".to_string()]],
            },
        );
        AiYamlDocument {
            id: "commit-message".to_string(),
            meta: Meta {
                version: "1.2.0".to_string(),
                updated: "2026-01-15".to_string(),
                source: "core/commit-message-guide.md".to_string(),
                description: "How to write commits".to_string(),
                language: None,
            },
            structured: IndexMap::new(),
            rules: vec![Rule {
                id: "rules-1".to_string(),
                trigger: "writing commit message".to_string(),
                instruction: "Always write a descriptive subject".to_string(),
                priority: Priority::Required,
            }],
            quick_reference,
            choices: None,
        }
    }

    #[test]
    fn test_render_with_header() {
        let out = render(&sample(), true).unwrap();
        assert_eq!(
            out,
            "# Commit message - AI Optimized\n\
# Source: core/commit-message-guide.md\n\
\n\
id: commit-message\n\
meta:\n  version: 1.2.0\n  updated: \"2026-01-15\"\n  source: core/commit-message-guide.md\n  description: How to write commits\n\
rules:\n  - id: rules-1\n    trigger: writing commit message\n    instruction: Always write a descriptive subject\n    priority: required\n\
quick_reference:\n  commit-types:\n    columns: [Type, Meaning]\n    rows:\n      - [feat, New feature]\n"
        );
    }

    #[test]
    fn test_render_without_header_omits_empty_parts() {
        let mut doc = sample();
        doc.rules.clear();
        doc.quick_reference.clear();
        let out = render(&doc, false).unwrap();
        assert!(out.starts_with("id: commit-message\n"));
        assert!(!out.contains("rules"));
        assert!(!out.contains("quick_reference"));
        assert!(out.ends_with("description: How to write commits\n"));
    }

    #[test]
    fn test_header_title() {
        assert_eq!(header_title("commit-message"), "Commit message");
        assert_eq!(header_title("tdd"), "Tdd");
        assert_eq!(header_title(""), "");
    }
}
