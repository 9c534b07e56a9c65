//! Identifier and key derivation

/// Source file stem → document id
pub const STANDARD_IDS: &[(&str, &str)] = &[
    ("commit-message-guide", "commit-message"),
    ("changelog-standards", "changelog"),
    ("code-review-checklist", "code-review"),
    ("testing-standards", "testing"),
    ("git-workflow", "git-workflow"),
    ("documentation-structure", "documentation"),
    ("checkin-standards", "checkin"),
    ("anti-hallucination", "anti-hallucination"),
    ("versioning", "versioning"),
    ("test-driven-development", "tdd"),
    ("spec-driven-development", "sdd"),
    ("test-completeness-dimensions", "test-completeness"),
    ("logging-standards", "logging"),
    ("error-code-standards", "error-code"),
    ("refactoring-standards", "refactoring"),
    ("graceful-failure", "graceful-failure"),
    ("release-workflow", "release-workflow"),
];

/// Section heading → structured content key
pub const SECTION_KEYS: &[(&str, &str)] = &[
    ("Purpose", "meta.description"),
    ("Basic Format", "format"),
    ("Type Classification", "types"),
    ("Scope Guidelines", "scopes"),
    ("Subject Line", "subject"),
    ("Body", "body"),
    ("Footer", "footer"),
    ("Complete Examples", "examples"),
    ("Anti-Patterns", "anti_patterns"),
    ("Automation and Tooling", "tooling"),
    ("Project Configuration Template", "configuration"),
    ("Testing Pyramid", "pyramid"),
    ("Test Categories", "categories"),
    ("Commit Types", "types"),
    ("Branch Naming", "branches"),
    ("Merge Strategy", "merge_strategy"),
    ("Quick Reference", "quick_reference"),
];

const UNKNOWN_ID: &str = "unknown";

/// Document id for a source filename.
///
/// The explicit table wins. Otherwise a known suffix is dropped and the rest
/// is reduced to ASCII kebab-case.
pub fn standard_id(table: &[(&str, &str)], filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    if let Some((_, id)) = table.iter().find(|(name, _)| *name == stem) {
        return (*id).to_string();
    }

    let stripped = regex!(r"(?i)-?(guide|standards|standard|checklist)$").replace(stem, "");
    let id = kebab_case(&stripped);
    if id.is_empty() {
        UNKNOWN_ID.to_string()
    } else {
        id
    }
}

/// Lower-case ASCII kebab-case
pub fn kebab_case(text: &str) -> String {
    slug(text, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Kebab-case that keeps CJK ideographs, used for output keys
pub fn key_case(text: &str) -> String {
    slug(text, |c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
    })
}

fn slug(text: &str, keep: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if keep(c) {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Structured key for a section heading
pub fn section_key(table: &[(&str, &str)], name: &str) -> String {
    table
        .iter()
        .find(|(heading, _)| *heading == name)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| key_case(name))
}
