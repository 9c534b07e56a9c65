//! Trigger phrases and option categories

/// Document id → activity during which its rules apply
pub const TRIGGERS: &[(&str, &str)] = &[
    ("commit-message", "writing commit message"),
    ("testing", "writing tests"),
    ("code-review", "reviewing code"),
    ("git-workflow", "managing branches"),
    ("documentation", "writing documentation"),
    ("changelog", "updating changelog"),
    ("versioning", "determining version number"),
    ("checkin", "committing code"),
    ("anti-hallucination", "collaborating with AI"),
    ("tdd", "developing with TDD"),
    ("sdd", "developing with specs"),
    ("logging", "adding logging"),
    ("error-code", "defining error codes"),
    ("refactoring", "refactoring code"),
    ("graceful-failure", "handling failures"),
];

/// Section-name vocabulary, checked in order
const SECTION_VOCABULARY: &[(&str, &str)] = &[
    ("commit", "writing commit message"),
    ("scope", "specifying scope"),
    ("subject", "writing subject line"),
    ("body", "writing commit body"),
    ("footer", "adding footer"),
    ("type", "choosing type"),
    ("format", "formatting"),
    ("test", "writing tests"),
    ("review", "reviewing code"),
    ("branch", "working with branches"),
];

pub const DEFAULT_TRIGGER: &str = "applying this standard";

/// Title vocabulary → options category
const OPTION_CATEGORIES: &[(&str, &str)] = &[
    ("commit", "commit_language"),
    ("test", "testing_approach"),
    ("git", "git_workflow"),
    ("changelog", "changelog_format"),
    ("review", "review_style"),
];

pub const DEFAULT_OPTION_CATEGORY: &str = "default_option";

/// Trigger for a rule found under `section_name` of document `standard_id`
pub fn trigger(
    table: &'static [(&'static str, &'static str)],
    standard_id: &str,
    section_name: &str,
) -> &'static str {
    if let Some((_, phrase)) = table.iter().find(|(id, _)| *id == standard_id) {
        return phrase;
    }
    let name = section_name.to_lowercase();
    SECTION_VOCABULARY
        .iter()
        .find(|(word, _)| name.contains(word))
        .map_or(DEFAULT_TRIGGER, |(_, phrase)| phrase)
}

pub fn option_category(title: &str) -> &'static str {
    let title = title.to_lowercase();
    OPTION_CATEGORIES
        .iter()
        .find(|(word, _)| title.contains(word))
        .map_or(DEFAULT_OPTION_CATEGORY, |(_, category)| category)
}
