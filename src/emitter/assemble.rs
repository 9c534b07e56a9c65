//! Output IR assembly

use indexmap::IndexMap;
use tracing::debug;

use super::ConversionContext;
use crate::classify::{ClassificationRules, ids::key_case};
use crate::constants::extract::MIN_LIST_ITEMS;
use crate::constants::output::DEFAULT_VERSION;
use crate::extract::{Extracted, Limits};
use crate::parser::{extract_code_blocks, strip_fenced};
use crate::types::{
    AiYamlDocument, Meta, ParsedDocument, RESERVED_KEYS, Result, Section, SectionKind,
    StructuredValue, Subsection,
};

/// Combine the parsed document and extracted content into the output IR
pub fn emit(
    doc: &ParsedDocument,
    extracted: Extracted,
    context: &ConversionContext,
    classification: &ClassificationRules,
    limits: Limits,
) -> Result<AiYamlDocument> {
    let id = classification.standard_id(&context.filename);

    let meta = Meta {
        version: non_empty(&doc.metadata.version).unwrap_or(DEFAULT_VERSION).to_string(),
        updated: non_empty(&doc.metadata.updated)
            .unwrap_or(context.today.as_str())
            .to_string(),
        source: classification.source_path(&context.filename, context.locale.as_deref()),
        description: non_empty(&doc.purpose)
            .or_else(|| non_empty(&doc.metadata.title))
            .unwrap_or_default()
            .to_string(),
        language: context.locale.clone(),
    };

    let Extracted {
        rules,
        quick_reference,
        choices,
    } = extracted;

    // A structured key may only reuse a reserved name when nothing else
    // claims it at the top level
    let taken = |key: &str| match key {
        "id" | "meta" => true,
        "rules" => !rules.is_empty(),
        "quick_reference" => !quick_reference.is_empty(),
        "decision" | "options" => choices.is_some(),
        _ => false,
    };

    let mut structured: IndexMap<String, IndexMap<String, StructuredValue>> = IndexMap::new();
    for section in doc
        .sections
        .iter()
        .filter(|s| !s.subsections.is_empty())
        .filter(|s| !s.kind.is_metadata() && s.kind != SectionKind::Purpose)
    {
        let key = classification.section_key(&section.name);
        if key.contains('.') || (RESERVED_KEYS.contains(&key.as_str()) && taken(&key)) {
            debug!(section = %section.name, key = %key, "Dropping structured section");
            continue;
        }
        let entry = structured.entry(key).or_default();
        for (sub_key, value) in section_values(section, limits.text_cap) {
            entry.entry(sub_key).or_insert(value);
        }
    }

    let doc = AiYamlDocument {
        id,
        meta,
        structured,
        rules,
        quick_reference,
        choices,
    };
    doc.validate(limits.max_rules)?;
    Ok(doc)
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn section_values(section: &Section, text_cap: usize) -> Vec<(String, StructuredValue)> {
    section
        .subsections
        .iter()
        .enumerate()
        .map(|(i, sub)| {
            let key = key_case(&sub.name);
            let key = if key.is_empty() {
                format!("subsection-{}", i + 1)
            } else {
                key
            };
            (key, subsection_value(sub, text_cap))
        })
        .collect()
}

/// Bullet list, else first code block, else truncated prose
pub fn subsection_value(sub: &Subsection, text_cap: usize) -> StructuredValue {
    let prose = strip_fenced(&sub.content);
    let items: Vec<String> = regex!(r"(?m)^[-*][ \t]+(.+)$")
        .captures_iter(&prose)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if items.len() > MIN_LIST_ITEMS {
        return StructuredValue::List(items);
    }

    if let Some(block) = extract_code_blocks(&sub.content).into_iter().next() {
        return StructuredValue::Code(block.content);
    }

    let text = sub.content.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() > text_cap {
        let truncated: String = text.chars().take(text_cap).collect();
        StructuredValue::Text(format!("{}...", truncated))
    } else {
        StructuredValue::Text(text)
    }
}
