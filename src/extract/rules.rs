//! Imperative rule extraction
//!
//! Every section body (with fenced code removed) is scanned with a fixed,
//! ordered list of patterns. Matches are accepted in section order, then
//! pattern order, then position. Each accepted match takes the next number
//! in a document-wide counter, so ids stay stable when later duplicates are
//! dropped. A rule's priority comes from the keyword its pattern is bound
//! to, not from words inside the instruction.

use regex::Regex;
use std::collections::HashSet;

use crate::classify::{ClassificationRules, ids::key_case};
use crate::constants::extract::{DEDUP_PREFIX_CHARS, MAX_INSTRUCTION_CHARS, MIN_INSTRUCTION_CHARS};
use crate::parser::strip_fenced;
use crate::types::{ParsedDocument, Rule};

/// Rule patterns in acceptance order with the keyword each is bound to;
/// capture group 1 is the instruction
fn patterns() -> [(&'static Regex, &'static str); 6] {
    [
        (regex!(r"(?i)\*\*CRITICAL\*\*:?[ \t]*([^.\n]+)"), "CRITICAL"),
        (regex!(r"(?i)\*\*IMPORTANT\*\*:?[ \t]*([^.\n]+)"), "IMPORTANT"),
        (regex!(r"(?im)^[ \t]*[-*][ \t]+(MUST[ \t]+[^.\n]+)"), "MUST"),
        (regex!(r"(?im)^[ \t]*[-*][ \t]+(SHOULD[ \t]+[^.\n]+)"), "SHOULD"),
        (regex!(r"(?im)^[ \t]*[-*][ \t]+(Always[ \t]+[^.\n]+)"), "Always"),
        (regex!(r"(?im)^[ \t]*[-*][ \t]+(Never[ \t]+[^.\n]+)"), "Never"),
    ]
}

pub fn extract(
    doc: &ParsedDocument,
    standard_id: &str,
    classification: &ClassificationRules,
    max_rules: usize,
) -> Vec<Rule> {
    let mut accepted = Vec::new();
    let mut counter = 0usize;

    for section in &doc.sections {
        let body = strip_fenced(&section.content);
        let section_key = key_case(&section.name);

        for (re, keyword) in patterns() {
            let priority = classification.priority(keyword);
            for caps in re.captures_iter(&body) {
                let Some(group) = caps.get(1) else {
                    continue;
                };
                let instruction = clean_instruction(group.as_str());
                let len = instruction.chars().count();
                if !(MIN_INSTRUCTION_CHARS..=MAX_INSTRUCTION_CHARS).contains(&len) {
                    continue;
                }

                counter += 1;
                accepted.push(Rule {
                    id: format!("{}-{}", section_key, counter),
                    trigger: classification.trigger(standard_id, &section.name).to_string(),
                    priority,
                    instruction,
                });
            }
        }
    }

    let mut seen = HashSet::new();
    accepted
        .into_iter()
        .filter(|rule| seen.insert(dedup_key(&rule.instruction)))
        .take(max_rules)
        .collect()
}

/// Case-folded instruction prefix two rules must not share
fn dedup_key(instruction: &str) -> String {
    instruction
        .to_lowercase()
        .chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect()
}

/// Strip emphasis and code markup and collapse whitespace
pub fn clean_instruction(text: &str) -> String {
    text.replace("**", "")
        .replace('`', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
