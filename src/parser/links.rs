use super::tables::parse_row;
use crate::types::{RelatedStandard, Section, SectionKind, VersionEntry};

pub fn related_standards(sections: &[Section]) -> Vec<RelatedStandard> {
    let Some(section) = sections
        .iter()
        .find(|s| s.kind == SectionKind::RelatedStandards)
    else {
        return Vec::new();
    };

    regex!(r"\[(.+?)\]\((.+?)\)")
        .captures_iter(&section.content)
        .map(|caps| RelatedStandard {
            name: caps[1].to_string(),
            path: caps[2].to_string(),
        })
        .collect()
}

/// Rows of the version history table, skipping its header and separator
pub fn version_history(sections: &[Section]) -> Vec<VersionEntry> {
    let Some(section) = sections
        .iter()
        .find(|s| s.kind == SectionKind::VersionHistory)
    else {
        return Vec::new();
    };

    section
        .content
        .lines()
        .filter(|l| l.contains('|'))
        .skip(2)
        .filter_map(|line| match parse_row(line).as_slice() {
            [version, date, changes, ..] => Some(VersionEntry {
                version: version.clone(),
                date: date.clone(),
                changes: changes.clone(),
            }),
            _ => None,
        })
        .collect()
}
