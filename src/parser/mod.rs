//! Structural Parser
//!
//! Turns a standards document into a [`ParsedDocument`]. The parser is a set
//! of independent extractors (metadata, sections, tables, code blocks,
//! decision points, links) over the same text, so a missing or reordered
//! part only empties its own field.
//!
//! Parsing never fails. Malformed tables or absent sections yield empty
//! collections and a `debug!` line.

mod code_blocks;
mod decisions;
mod links;
mod metadata;
mod sections;
mod tables;

use std::borrow::Cow;
use tracing::debug;

use crate::types::ParsedDocument;

pub use code_blocks::extract as extract_code_blocks;
pub use tables::{extract as extract_tables, parse_row};

/// Parse raw Markdown into the document IR
pub fn parse(text: &str) -> ParsedDocument {
    let text = normalize_newlines(text);

    let sections = sections::extract(&text);
    let doc = ParsedDocument {
        metadata: metadata::extract(&text),
        purpose: sections::purpose(&sections),
        tables: tables::extract(&text),
        code_blocks: code_blocks::extract(&text),
        decision_points: decisions::extract(&text),
        related_standards: links::related_standards(&sections),
        version_history: links::version_history(&sections),
        sections,
    };

    debug!(
        title = %doc.metadata.title,
        sections = doc.sections.len(),
        tables = doc.tables.len(),
        code_blocks = doc.code_blocks.len(),
        decisions = doc.decision_points.len(),
        "Parsed document"
    );

    doc
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// =============================================================================
// Line Scanning
// =============================================================================

/// One source line with its byte offset and fence state
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub start: usize,
    pub text: &'a str,
    /// Delimiter line of a fenced code block
    pub is_fence: bool,
    /// Body line of a fenced code block
    pub in_code: bool,
}

impl Line<'_> {
    /// Line outside every fenced code block
    pub fn is_prose(&self) -> bool {
        !self.is_fence && !self.in_code
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Split `text` into lines, marking fenced code regions.
///
/// An unmatched trailing fence is treated as plain text so a stray
/// backtick run cannot swallow the rest of the document.
pub(crate) fn scan_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        lines.push(Line {
            start: offset,
            text: line,
            is_fence: false,
            in_code: false,
        });
        offset += raw.len();
    }

    let fences: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| is_fence_line(l.text))
        .map(|(i, _)| i)
        .collect();

    for pair in fences.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        lines[open].is_fence = true;
        lines[close].is_fence = true;
        for line in &mut lines[open + 1..close] {
            line.in_code = true;
        }
    }

    lines
}

/// The last `len` characters of `text` before byte offset `pos`
pub(crate) fn window_before(text: &str, pos: usize, len: usize) -> &str {
    let head = &text[..pos];
    let start = match len.checked_sub(1) {
        Some(n) => head.char_indices().rev().nth(n).map_or(0, |(i, _)| i),
        None => pos,
    };
    &head[start..]
}

/// The first `len` characters of `text` from byte offset `pos`
pub(crate) fn window_after(text: &str, pos: usize, len: usize) -> &str {
    let tail = &text[pos..];
    let end = tail.char_indices().nth(len).map_or(tail.len(), |(i, _)| i);
    &tail[..end]
}

/// `text` with fenced code blocks removed
pub(crate) fn strip_fenced(text: &str) -> String {
    scan_lines(text)
        .iter()
        .filter(|l| l.is_prose())
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `---` style horizontal rule
pub(crate) fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}
