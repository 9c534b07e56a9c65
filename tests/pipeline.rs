//! End-to-end conversion through the public library API.

mod common;

use std::path::PathBuf;

use aiyaml::classify::{ids, priority};
use aiyaml::constants::manual::{END_MARKER, START_MARKER};
use aiyaml::emitter::yaml::{self, Node};
use aiyaml::{
    Config, ConversionInput, Converter, Priority, extract_manual, merge_manual, parse,
};
use common::TESTING_STANDARDS;
use proptest::prelude::*;
use serde_yaml::Value;

fn converter() -> Converter {
    Converter::from_config(&Config::default(), "2026-03-01")
}

fn input(path: &str, text: &str, prior: Option<String>) -> ConversionInput {
    ConversionInput {
        relative_path: PathBuf::from(path),
        text: text.to_string(),
        prior,
    }
}

fn convert(text: &str, prior: Option<String>) -> String {
    converter()
        .convert(&input("core/testing-standards.md", text, prior))
        .unwrap()
        .rendered
}

// =============================================================================
// Full document
// =============================================================================

#[test]
fn test_full_document_structure() {
    let rendered = convert(TESTING_STANDARDS, None);
    assert!(rendered.starts_with(
        "# Testing - AI Optimized\n# Source: core/testing-standards.md\n\nid: testing\n"
    ));
    assert!(rendered.contains("  version: 2.1.0\n"));
    assert!(rendered.contains("  updated: \"2026-01-15\"\n"));
    assert!(rendered.ends_with('\n') && !rendered.ends_with("\n\n"));

    let doc: Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(doc["id"].as_str(), Some("testing"));

    let meta = &doc["meta"];
    assert_eq!(meta["version"].as_str(), Some("2.1.0"));
    assert_eq!(meta["updated"].as_str(), Some("2026-01-15"));
    assert_eq!(
        meta["description"].as_str(),
        Some("Define how tests are written and maintained.")
    );
    assert!(meta.get("language").is_none());

    let pyramid = &doc["pyramid"];
    let unit = pyramid["unit-tests"].as_sequence().unwrap();
    assert_eq!(unit.len(), 3);
    assert_eq!(unit[0].as_str(), Some("Fast and isolated"));
    assert_eq!(pyramid["example-layout"].as_str(), Some("tests/\n  unit/"));

    let rules = doc["rules"].as_sequence().unwrap();
    assert_eq!(rules.len(), 3);
    assert!(rules.iter().all(|r| r["trigger"].as_str() == Some("writing tests")));
    assert!(rules.iter().any(|r| {
        r["instruction"].as_str() == Some("Never share mutable state between tests")
            && r["priority"].as_str() == Some("required")
    }));
    assert!(rules.iter().any(|r| r["priority"].as_str() == Some("recommended")));

    let table = &doc["quick_reference"]["test-types"];
    let columns: Vec<_> = table["columns"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(columns, vec!["Type", "Scope", "Speed"]);
    assert_eq!(table["rows"].as_sequence().unwrap().len(), 2);

    assert_eq!(
        doc["decision"]["question"].as_str(),
        Some("Which option best fits your project?")
    );
    let options = &doc["options"]["testing_approach"];
    assert_eq!(options["default"].as_str(), Some("test-first"));
    assert_eq!(
        options["choices"][1]["file"].as_str(),
        Some("options/testing_approach/test-after.ai.yaml")
    );
}

#[test]
fn test_top_level_key_order() {
    let rendered = convert(TESTING_STANDARDS, None);
    let doc: Value = serde_yaml::from_str(&rendered).unwrap();
    let keys: Vec<_> = doc
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap())
        .collect();
    let position = |key: &str| keys.iter().position(|k| *k == key).unwrap();
    assert_eq!(position("id"), 0);
    assert_eq!(position("meta"), 1);
    assert!(position("pyramid") < position("rules"));
    assert!(position("rules") < position("quick_reference"));
    assert!(position("quick_reference") < position("decision"));
    assert!(position("decision") < position("options"));
}

#[test]
fn test_version_history_and_links_in_ir() {
    let parsed = parse(TESTING_STANDARDS);
    assert_eq!(parsed.version_history.len(), 1);
    let link = parsed.metadata.language_link.as_ref().unwrap();
    assert_eq!(link.path, "../locales/zh-TW/core/testing-standards.md");
    assert_eq!(parsed.metadata.applicability, "All projects");
}

#[test]
fn test_rule_cap() {
    let mut text = String::from("# Review Checklist\n\n## Rules\n\n");
    for n in 1..=20 {
        text.push_str(&format!("- MUST apply rule {:02} during review\n", n));
    }
    let rendered = convert(&text, None);
    let doc: Value = serde_yaml::from_str(&rendered).unwrap();
    let rules = doc["rules"].as_sequence().unwrap();
    assert_eq!(rules.len(), 15);
    assert_eq!(rules[0]["id"].as_str(), Some("rules-1"));
    assert_eq!(rules[14]["id"].as_str(), Some("rules-15"));
}

#[test]
fn test_priority_precedence() {
    assert_eq!(priority::infer("You MUST run this, or you MAY skip"), Priority::Required);
    assert_eq!(priority::infer("You SHOULD, but MAY not"), Priority::Recommended);
    assert_eq!(priority::infer("Consider a cache"), Priority::Optional);
    assert_eq!(priority::infer("Mustard on the side"), Priority::Recommended);
    assert_eq!(priority::infer("plain prose"), Priority::Recommended);
}

#[test]
fn test_scalar_quoting_rules() {
    assert_eq!(yaml::scalar("3.3.0"), "3.3.0");
    assert_eq!(yaml::scalar("2026-01-15"), "\"2026-01-15\"");
    assert_eq!(yaml::scalar("42"), "\"42\"");
    assert_eq!(yaml::scalar("yes"), "\"yes\"");
    assert_eq!(yaml::scalar("type: scope"), "\"type: scope\"");
    assert_eq!(yaml::scalar(""), "\"\"");
    assert_eq!(yaml::scalar("Plain words"), "Plain words");
}

#[test]
fn test_table_separator_optional() {
    let with = "| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n| 5 | 6 |\n";
    let without = "| A | B |\n| 1 | 2 |\n| 3 | 4 |\n| 5 | 6 |\n";
    let a = &parse(with).tables[0];
    let b = &parse(without).tables[0];
    assert_eq!(a.headers.len(), 2);
    assert_eq!(a.rows.len(), 3);
    assert_eq!(a.headers, b.headers);
    assert_eq!(a.rows, b.rows);
}

// =============================================================================
// Properties
// =============================================================================

const SNIPPETS: &[&str] = &[
    "## Rules\n\n- MUST keep functions small\n- SHOULD prefer composition\n\n",
    "## Subject Line\n\n### Length\n\nKeep it short.\n\n### Mood\n\n- imperative\n- present\n- concise\n\n",
    "## Reference\n\n| Key | Value |\n|-----|-------|\n| a | 1 |\n\n",
    "## Setup\n\n```bash\ncargo test\n```\n\n",
    "**IMPORTANT**: document every public item.\n\n",
    "## Decide\n\n### Option A: Squash\n\nOne commit.\n\n### Option B: Rebase\n\nLinear.\n\n",
    "Plain paragraph with: colons, #hashes and [brackets].\n\n",
];

fn source_text() -> impl Strategy<Value = String> {
    (
        "[A-Za-z ]{1,20}",
        prop::collection::vec(prop::sample::select(SNIPPETS), 0..6),
    )
        .prop_map(|(title, parts)| format!("# {}\n\n**Version**: 1.2.3\n\n{}", title, parts.concat()))
}

/// Manual content that survives a merge byte for byte
fn manual_content() -> impl Strategy<Value = String> {
    "[a-z0-9 #:\n-]{1,60}".prop_filter("needs visible content", |s| !s.trim().is_empty())
}

fn any_scalar() -> impl Strategy<Value = String> {
    prop_oneof!["\\PC{0,40}", "[a-z0-9 \\t\\n:#'\"\\\\.-]{0,30}"]
}

proptest! {
    #[test]
    fn prop_regeneration_is_idempotent(text in source_text(), manual in manual_content()) {
        let prior = merge_manual("id: old\nmeta: {}\n", &manual);
        let first = convert(&text, Some(prior));
        let second = convert(&text, Some(first.clone()));
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn prop_manual_content_is_invariant(text in source_text(), manual in manual_content()) {
        let prior = merge_manual("id: old\n", &manual);
        let rendered = convert(&text, Some(prior));
        let section = extract_manual(&rendered);
        prop_assert!(section.present);
        prop_assert_eq!(section.content, manual);
        prop_assert_eq!(rendered.matches(START_MARKER).count(), 1);
        let expected_suffix = format!("{}\n", END_MARKER);
        prop_assert!(rendered.ends_with(&expected_suffix));
    }

    #[test]
    fn prop_output_is_valid_yaml(text in source_text()) {
        let rendered = convert(&text, None);
        let doc: Value = serde_yaml::from_str(&rendered).unwrap();
        prop_assert!(doc["id"].is_string());
        prop_assert!(doc["meta"].is_mapping());
    }

    #[test]
    fn prop_standard_id_is_deterministic_kebab(name in "[A-Za-z0-9 _.-]{0,30}") {
        let filename = format!("{}.md", name);
        let id = ids::standard_id(ids::STANDARD_IDS, &filename);
        prop_assert_eq!(&id, &ids::standard_id(ids::STANDARD_IDS, &filename));
        prop_assert!(!id.is_empty());
        prop_assert!(!id.starts_with('-') && !id.ends_with('-'));
        prop_assert!(!id.contains("--"));
        prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn prop_scalars_reparse_unchanged(value in any_scalar()) {
        let text = yaml::to_string(&Node::Map(vec![("k".to_string(), Node::scalar(value.clone()))]))
            .unwrap();
        let doc: Value = serde_yaml::from_str(&text).unwrap();
        prop_assert_eq!(doc["k"].as_str(), Some(value.as_str()));
    }

    #[test]
    fn prop_table_separator_is_optional(
        headers in prop::collection::vec("[a-z0-9]{1,8}", 2..5),
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,8}", 4), 1..5),
    ) {
        let width = headers.len();
        let line = |cells: &[String]| format!("| {} |\n", cells.join(" | "));
        let body: String = rows.iter().map(|r| line(&r[..width.min(r.len())])).collect();
        let separator = format!("|{}\n", "---|".repeat(width));

        let with = format!("{}{}{}", line(&headers), separator, body);
        let without = format!("{}{}", line(&headers), body);
        let a = parse(&with);
        let b = parse(&without);
        prop_assert_eq!(a.tables.len(), 1);
        prop_assert_eq!(&a.tables[0].headers, &headers);
        prop_assert_eq!(a.tables[0].rows.len(), rows.len());
        prop_assert_eq!(&a.tables[0].headers, &b.tables[0].headers);
        prop_assert_eq!(&a.tables[0].rows, &b.tables[0].rows);
    }
}
