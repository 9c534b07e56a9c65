use crate::classify::{ClassificationRules, ids::key_case};
use crate::constants::extract::DECISION_QUESTION;
use crate::constants::output::FILE_SUFFIX;
use crate::types::{
    Decision, DecisionEntry, OptionChoice, OptionFile, OptionSet, OptionsBlock, ParsedDocument,
};

/// Decision matrix and option files for the first option run, if any
pub fn extract(doc: &ParsedDocument, classification: &ClassificationRules) -> Option<OptionSet> {
    let options = doc.options_decision().filter(|o| !o.is_empty())?;
    let category = classification.option_category(&doc.metadata.title);
    let selects: Vec<String> = options.iter().map(select_key).collect();

    let matrix = options
        .iter()
        .zip(&selects)
        .map(|(opt, select)| DecisionEntry {
            answer: opt.label.clone(),
            select: select.clone(),
        })
        .collect();

    let choices = selects
        .iter()
        .map(|select| OptionFile {
            id: select.clone(),
            file: format!("options/{}/{}{}", category, select, FILE_SUFFIX),
        })
        .collect();

    Some(OptionSet {
        decision: Decision {
            question: DECISION_QUESTION.to_string(),
            matrix,
        },
        options: OptionsBlock {
            category: category.to_string(),
            default: selects.first().cloned().unwrap_or_default(),
            choices,
        },
    })
}

/// Kebab-cased label, or `option-<letter>` when nothing survives
fn select_key(option: &OptionChoice) -> String {
    let key = key_case(&option.label);
    if key.is_empty() {
        format!("option-{}", option.id.to_lowercase())
    } else {
        key
    }
}
