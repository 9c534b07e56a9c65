//! Minimal YAML Writer
//!
//! Deterministic writer for the subset of YAML the output format needs:
//! block mappings, block and flow sequences, plain, double-quoted and
//! literal (`|-`) scalars. It is not a general YAML emitter; every value
//! it accepts is a [`Node`].
//!
//! ## Layout
//! - Two spaces per nesting level
//! - A sequence of at most five short scalars is written inline: `[a, b]`
//! - In a block sequence of mappings the first key shares the dash line
//! - Multi-line strings become `|-` blocks one level deeper than their key

use std::collections::HashSet;

use crate::constants::yaml::{INDENT, INLINE_MAX_ITEMS, INLINE_MAX_ITEM_CHARS};
use crate::types::{ConvertError, Result};

/// A value tree accepted by the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Seq(Vec<Node>),
    Map(Vec<(String, Node)>),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Seq(items.into_iter().map(|s| Self::Scalar(s.into())).collect())
    }
}

/// Serialize a top-level mapping
pub fn to_string(root: &Node) -> Result<String> {
    let Node::Map(entries) = root else {
        return Err(ConvertError::serialization("$", "document root must be a mapping"));
    };

    let mut writer = Writer::default();
    writer.map(entries, 0, false, "")?;

    let mut out = writer.lines.join("\n");
    out.push('\n');
    Ok(out)
}

#[derive(Default)]
struct Writer {
    lines: Vec<String>,
}

impl Writer {
    /// Mapping entries with keys at column `col`. With `dash`, the first key
    /// sits on a sequence item's dash line.
    fn map(&mut self, entries: &[(String, Node)], col: usize, dash: bool, path: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, (key, value)) in entries.iter().enumerate() {
            let child = child_path(path, key);
            if !seen.insert(key.as_str()) {
                return Err(ConvertError::serialization(child, "duplicate key"));
            }
            let lead = if dash && i == 0 {
                format!("{}- ", pad(col.saturating_sub(INDENT)))
            } else {
                pad(col)
            };
            let head = format!("{}{}:", lead, render_key(key, &child)?);
            self.value(head, value, col, &child)?;
        }
        Ok(())
    }

    /// Sequence items with dashes at column `col`
    fn seq(&mut self, items: &[Node], col: usize, path: &str) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            let child = format!("{}[{}]", path, i);
            match item {
                Node::Map(entries) if !entries.is_empty() => {
                    self.map(entries, col + INDENT, true, &child)?
                }
                _ => self.value(format!("{}-", pad(col)), item, col, &child)?,
            }
        }
        Ok(())
    }

    /// Write `value` after `head` (a `key:` or `-` prefix owned by column `col`)
    fn value(&mut self, head: String, value: &Node, col: usize, path: &str) -> Result<()> {
        match value {
            Node::Scalar(s) if is_block_eligible(s) => {
                self.lines.push(format!("{} |-", head));
                let indent = pad(col + INDENT);
                for line in s.split('\n') {
                    self.lines.push(if line.is_empty() {
                        String::new()
                    } else {
                        format!("{}{}", indent, line)
                    });
                }
            }
            Node::Scalar(s) => self.lines.push(format!("{} {}", head, scalar(s))),
            Node::Seq(items) if items.is_empty() => self.lines.push(format!("{} []", head)),
            Node::Seq(items) if is_inline_eligible(items) => {
                self.lines.push(format!("{} {}", head, inline(items)))
            }
            Node::Seq(items) => {
                self.lines.push(head);
                self.seq(items, col + INDENT, path)?;
            }
            Node::Map(entries) if entries.is_empty() => self.lines.push(format!("{} {{}}", head)),
            Node::Map(entries) => {
                self.lines.push(head);
                self.map(entries, col + INDENT, false, path)?;
            }
        }
        Ok(())
    }
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn render_key(key: &str, path: &str) -> Result<String> {
    if key.is_empty() {
        return Err(ConvertError::serialization(path, "empty mapping key"));
    }
    if key.contains('\n') {
        return Err(ConvertError::serialization(path, "multi-line mapping key"));
    }
    Ok(scalar(key))
}

fn is_inline_eligible(items: &[Node]) -> bool {
    items.len() <= INLINE_MAX_ITEMS
        && items.iter().all(|item| match item {
            Node::Scalar(s) => s.chars().count() < INLINE_MAX_ITEM_CHARS && !s.contains('\n'),
            _ => false,
        })
}

fn inline(items: &[Node]) -> String {
    let parts: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            Node::Scalar(s) => Some(scalar(s)),
            _ => None,
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Multi-line text that a `|-` block reproduces exactly
fn is_block_eligible(s: &str) -> bool {
    s.contains('\n')
        && s.trim() == s
        && !s.split('\n').any(|line| !line.is_empty() && line.trim().is_empty())
        && !s.chars().any(|c| !matches!(c, '\n' | '\t') && needs_escape(c))
}

/// Characters YAML readers may treat as line breaks or byte-order marks
fn is_special_break(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}')
}

/// Outside the YAML printable set, so only a `\u` escape can carry it
fn is_unprintable(c: char) -> bool {
    !matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{7e}'
            | '\u{85}'
            | '\u{a0}'..='\u{d7ff}'
            | '\u{e000}'..='\u{fffd}'
            | '\u{10000}'..='\u{10ffff}'
    )
}

/// Characters a scalar may only hold inside double quotes
fn needs_escape(c: char) -> bool {
    c.is_control() || is_special_break(c) || is_unprintable(c)
}

// =============================================================================
// Scalars
// =============================================================================

const BOOLEAN_LIKE: &[&str] = &["true", "false", "yes", "no", "on", "off", "null", "y", "n", "~"];

/// Plain or double-quoted representation of a single-line scalar
pub fn scalar(s: &str) -> String {
    if needs_quotes(s) {
        quote(s)
    } else {
        s.to_string()
    }
}

pub fn needs_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };

    if s.trim() != s
        || "#&*!|>'\"%@`-?,[]{}.+~".contains(first)
        || s.chars().any(|c| ":#{}[],&*?|<>=!%@`".contains(c))
        || s.chars().any(needs_escape)
        || BOOLEAN_LIKE.contains(&s.to_lowercase().as_str())
    {
        return true;
    }

    first.is_ascii_digit() && !is_version_shaped(s)
}

/// `N.N.N...`, which no YAML schema reads as a number
fn is_version_shaped(s: &str) -> bool {
    regex!(r"^\d+(\.\d+){2,}").is_match(s)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if needs_escape(c) => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
