use regex::Regex;

use crate::types::Priority;

/// Keyword classes in precedence order; the first class with a whole-word
/// match decides
fn patterns() -> [(&'static Regex, Priority); 3] {
    [
        (
            regex!(r"(?i)\b(MUST NOT|DO NOT|NEVER|MUST|CRITICAL|IMPORTANT|REQUIRED|ALWAYS)\b"),
            Priority::Required,
        ),
        (regex!(r"(?i)\b(SHOULD|RECOMMENDED|PREFER)\b"), Priority::Recommended),
        (regex!(r"(?i)\b(MAY|OPTIONAL|CONSIDER)\b"), Priority::Optional),
    ]
}

/// Priority implied by imperative keywords in `text`, `recommended` when
/// none are present
pub fn infer(text: &str) -> Priority {
    patterns()
        .into_iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, priority)| priority)
        .unwrap_or_default()
}
