//! Level-2 sections and their level-3 subsections

use super::{is_rule_line, scan_lines};
use crate::types::{Section, SectionKind, Subsection};

/// One heading located by [`headings`]
struct Heading<'a> {
    /// Byte offset of the heading line
    start: usize,
    /// Byte offset just past the heading line
    body_start: usize,
    name: &'a str,
}

/// Headings of exactly the level given by `marker` (`"## "` or `"### "`),
/// ignoring lines inside fenced code
fn headings<'a>(text: &'a str, marker: &str) -> Vec<Heading<'a>> {
    scan_lines(text)
        .into_iter()
        .filter(|l| l.is_prose())
        .filter_map(|l| {
            let name = l.text.strip_prefix(marker)?.trim();
            (!name.is_empty()).then_some(Heading {
                start: l.start,
                body_start: l.end(),
                name,
            })
        })
        .collect()
}

/// Slice between each heading and the next
fn split<'a>(text: &'a str, heads: &[Heading<'a>]) -> Vec<(&'a str, &'a str)> {
    heads
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let end = heads.get(i + 1).map_or(text.len(), |next| next.start);
            (h.name, &text[h.body_start..end])
        })
        .collect()
}

/// Trim a body and drop a leading and a trailing horizontal rule
fn clean_body(body: &str) -> String {
    let mut lines: Vec<&str> = body.trim().lines().collect();
    if lines.first().is_some_and(|l| is_rule_line(l)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| is_rule_line(l)) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

pub fn extract(text: &str) -> Vec<Section> {
    split(text, &headings(text, "## "))
        .into_iter()
        .map(|(name, body)| {
            let content = clean_body(body);
            Section {
                name: name.to_string(),
                kind: classify(name, &content),
                subsections: subsections(&content),
                content,
            }
        })
        .collect()
}

fn subsections(content: &str) -> Vec<Subsection> {
    split(content, &headings(content, "### "))
        .into_iter()
        .map(|(name, body)| Subsection {
            name: name.to_string(),
            content: clean_body(body),
        })
        .collect()
}

/// Section kind by name first, then by content
pub fn classify(name: &str, content: &str) -> SectionKind {
    let name = name.to_lowercase();

    if name == "purpose" {
        SectionKind::Purpose
    } else if name.contains("version history") {
        SectionKind::VersionHistory
    } else if name.contains("related standards") {
        SectionKind::RelatedStandards
    } else if name.contains("references") {
        SectionKind::References
    } else if name == "license" {
        SectionKind::License
    } else if name.contains("anti-pattern") {
        SectionKind::AntiPatterns
    } else if name.contains("example") {
        SectionKind::Examples
    } else if name.contains("configuration") || name.contains("template") {
        SectionKind::Configuration
    } else if content.contains("| ") && content.contains(" |") {
        SectionKind::TableContent
    } else if content.contains("PROJECT MUST CHOOSE") || content.contains("MUST CHOOSE ONE") {
        SectionKind::DecisionPoint
    } else {
        SectionKind::Generic
    }
}

/// Body of the first purpose section, up to its first horizontal rule
pub fn purpose(sections: &[Section]) -> String {
    sections
        .iter()
        .find(|s| s.kind == SectionKind::Purpose)
        .map(|s| {
            s.content
                .lines()
                .take_while(|l| !is_rule_line(l))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_span_to_next_heading() {
        let text = "# T\n\n## One\n\nalpha\n\n## Two\n\nbeta\n";
        let sections = extract(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "One");
        assert_eq!(sections[0].content, "alpha");
        assert_eq!(sections[1].content, "beta");
    }

    #[test]
    fn test_rules_around_body_are_stripped() {
        let sections = extract("## One\n\n---\n\nalpha\n\n---\n\n## Two\nbeta");
        assert_eq!(sections[0].content, "alpha");
    }

    #[test]
    fn test_subsections_are_scoped() {
        let text = "## Format\n\nintro\n\n### Subject\n\nline one\n\n### Body\n\nline two\n\n## Next\n\n### Other\n";
        let sections = extract(text);
        assert_eq!(sections[0].subsections.len(), 2);
        assert_eq!(sections[0].subsections[0].name, "Subject");
        assert_eq!(sections[0].subsections[0].content, "line one");
        assert_eq!(sections[0].subsections[1].content, "line two");
        assert_eq!(sections[1].subsections.len(), 1);
    }

    #[test]
    fn test_headings_inside_code_are_ignored() {
        let text = "## Real\n\n```markdown\n## Fake\n### Also fake\n```\n";
        let sections = extract(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].subsections.is_empty());
    }

    #[test]
    fn test_classify_by_name() {
        assert_eq!(classify("Purpose", ""), SectionKind::Purpose);
        assert_eq!(classify("purpose of this", ""), SectionKind::Generic);
        assert_eq!(classify("Version History", ""), SectionKind::VersionHistory);
        assert_eq!(classify("Related Standards", ""), SectionKind::RelatedStandards);
        assert_eq!(classify("External References", ""), SectionKind::References);
        assert_eq!(classify("License", ""), SectionKind::License);
        assert_eq!(classify("Common Anti-Patterns", ""), SectionKind::AntiPatterns);
        assert_eq!(classify("Complete Examples", ""), SectionKind::Examples);
        assert_eq!(classify("Project Template", ""), SectionKind::Configuration);
    }

    #[test]
    fn test_classify_by_content() {
        assert_eq!(classify("Types", "| a | b |"), SectionKind::TableContent);
        assert_eq!(
            classify("Language", "PROJECT MUST CHOOSE ONE LANGUAGE"),
            SectionKind::DecisionPoint
        );
        assert_eq!(classify("Notes", "plain text"), SectionKind::Generic);
    }

    #[test]
    fn test_purpose_stops_at_rule() {
        let sections = extract("## Purpose\n\nWhy this exists.\n\n---\n\nMore text\n");
        assert_eq!(purpose(&sections), "Why this exists.");
    }

    #[test]
    fn test_purpose_absent() {
        assert!(purpose(&extract("## Other\n\ntext")).is_empty());
    }
}
