//! Manual-Section Merge
//!
//! A generated file may end with a block a human maintains by hand:
//!
//! ```text
//! # MANUAL ADDITIONS START
//! # Add custom rules below this line
//! <content>
//! # MANUAL ADDITIONS END
//! ```
//!
//! Markers are whole lines. Extraction takes the first start marker and the
//! first end marker after it; anything past that is ignored. The content is
//! copied byte for byte, so `extract(merge(text, m)).content == m` for any
//! `m` that has no end-marker line and does not end in `\r`.

use crate::constants::manual::{END_MARKER, HINT_LINE, START_MARKER};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualSection {
    /// Both markers were found
    pub present: bool,
    pub content: String,
}

impl ManualSection {
    /// Content worth writing back
    pub fn has_content(&self) -> bool {
        self.present && !self.content.trim().is_empty()
    }
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end() == marker
}

pub fn extract_manual(existing: &str) -> ManualSection {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in existing.split_inclusive('\n') {
        lines.push((offset, raw));
        offset += raw.len();
    }

    let Some(start_idx) = lines.iter().position(|(_, l)| is_marker(l, START_MARKER)) else {
        return ManualSection::default();
    };

    let mut body_idx = start_idx + 1;
    if lines
        .get(body_idx)
        .is_some_and(|(_, l)| is_marker(l, HINT_LINE))
    {
        body_idx += 1;
    }

    let Some(end_idx) = lines
        .iter()
        .skip(body_idx)
        .position(|(_, l)| is_marker(l, END_MARKER))
        .map(|i| i + body_idx)
    else {
        return ManualSection::default();
    };

    let body_start = lines.get(body_idx).map_or(existing.len(), |(o, _)| *o);
    let body_end = lines[end_idx].0;
    let mut content = &existing[body_start..body_end];
    content = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content);

    ManualSection {
        present: true,
        content: content.to_string(),
    }
}

/// Append a manual block to freshly generated text.
///
/// Empty or whitespace-only content leaves `new_text` unchanged.
pub fn merge_manual(new_text: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return new_text.to_string();
    }

    let mut out = String::with_capacity(new_text.len() + content.len() + 128);
    out.push_str(new_text);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    for line in [START_MARKER, HINT_LINE, content, END_MARKER] {
        out.push_str(line);
        out.push('\n');
    }
    out
}
