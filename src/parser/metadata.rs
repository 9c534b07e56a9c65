//! Header metadata
//!
//! Each field has its own single-line pattern and is looked up independently
//! within the first few lines of the document.

use crate::constants::parser::METADATA_LINES;
use crate::types::{LanguageLink, Metadata};

pub fn extract(text: &str) -> Metadata {
    let mut metadata = Metadata::default();

    for line in text.lines().take(METADATA_LINES) {
        if metadata.title.is_empty()
            && let Some(title) = line.strip_prefix("# ")
        {
            metadata.title = title.trim().to_string();
        }

        if let Some(caps) = regex!(r">\s*\*\*Language\*\*:\s*(.+)").captures(line)
            && let Some(link) = regex!(r"\[(.+?)\]\((.+?)\)").captures(&caps[1])
        {
            metadata.language_link = Some(LanguageLink {
                text: link[1].to_string(),
                path: link[2].to_string(),
            });
        }

        if let Some(value) = labeled(line, "Version") {
            metadata.version = value;
        }
        if let Some(value) = labeled(line, "Last Updated") {
            metadata.updated = value;
        }
        if let Some(value) = labeled(line, "Applicability") {
            metadata.applicability = value;
        }
    }

    metadata
}

/// Value of a `**Label**: value` line
fn labeled(line: &str, label: &str) -> Option<String> {
    let marker = format!("**{}**:", label);
    let idx = line.find(&marker)?;
    let value = line[idx + marker.len()..].trim();
    (!value.is_empty()).then(|| value.to_string())
}
