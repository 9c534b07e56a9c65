//! Decision points
//!
//! Two shapes are recognised: the imperative `PROJECT MUST CHOOSE ONE <TOPIC>`
//! phrase, and a run of `### Option A: <label>` headings. Only the first
//! contiguous run of options becomes a record; a non-option heading of level
//! two or three ends the run.

use super::{scan_lines, window_after, window_before};
use crate::constants::parser::DECISION_CONTEXT_WINDOW;
use crate::types::{DecisionPoint, OptionChoice};

pub fn extract(text: &str) -> Vec<DecisionPoint> {
    let mut decisions: Vec<DecisionPoint> = regex!(r"(?i)PROJECT MUST CHOOSE ONE\s+([A-Z]+)")
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(DecisionPoint::ChooseOne {
                topic: caps[1].to_lowercase(),
                context: context_around(text, whole.start()),
            })
        })
        .collect();

    let options = option_run(text);
    if !options.is_empty() {
        decisions.push(DecisionPoint::Options { options });
    }

    decisions
}

fn option_run(text: &str) -> Vec<OptionChoice> {
    let mut options = Vec::new();

    for line in scan_lines(text).iter().filter(|l| l.is_prose()) {
        if let Some(caps) = regex!(r"^###\s+Option\s+([A-Z]):?\s+(.+)$").captures(line.text) {
            options.push(OptionChoice {
                id: caps[1].to_string(),
                label: caps[2].trim().to_string(),
            });
        } else if !options.is_empty() && regex!(r"^#{2,3}\s").is_match(line.text) {
            break;
        }
    }

    options
}

fn context_around(text: &str, pos: usize) -> String {
    let (before, after) = DECISION_CONTEXT_WINDOW;
    format!(
        "{}{}",
        window_before(text, pos, before),
        window_after(text, pos, after)
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_one_topic_is_lowercased() {
        let decisions = extract("Note: PROJECT MUST CHOOSE ONE LANGUAGE for commits.");
        match decisions.as_slice() {
            [DecisionPoint::ChooseOne { topic, context }] => {
                assert_eq!(topic, "language");
                assert!(context.contains("for commits"));
            }
            other => panic!("unexpected decisions: {:?}", other),
        }
    }

    #[test]
    fn test_choose_one_context_counts_characters() {
        let lead = "決".repeat(100);
        let trail = "定".repeat(200);
        let text = format!("序{}PROJECT MUST CHOOSE ONE STYLE {}", lead, trail);
        let decisions = extract(&text);
        let [DecisionPoint::ChooseOne { context, .. }] = decisions.as_slice() else {
            panic!("expected one choose-one decision");
        };
        assert!(context.starts_with(&lead));
        assert!(!context.contains('序'));
        assert_eq!(context.chars().count(), 100 + 200);
        assert!(context.ends_with(&"定".repeat(170)));
    }

    #[test]
    fn test_option_run() {
        let text = "## Language\n\n### Option A: English\n\ntext\n\n### Option B: 中文\n\n### Option C: Bilingual\n";
        let decisions = extract(text);
        let DecisionPoint::Options { options } = &decisions[0] else {
            panic!("expected options");
        };
        let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(options[1].label, "中文");
    }

    #[test]
    fn test_option_run_ends_at_other_heading() {
        let text = "### Option A: One\n### Notes\n### Option B: Two\n";
        let decisions = extract(text);
        let DecisionPoint::Options { options } = &decisions[0] else {
            panic!("expected options");
        };
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_no_decisions() {
        assert!(extract("## Plain\n\nNothing to choose.").is_empty());
    }
}
