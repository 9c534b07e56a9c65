//! Pipe-delimited tables

use tracing::debug;

use super::{Line, scan_lines, window_before};
use crate::constants::parser::TABLE_CONTEXT_LOOKBACK;
use crate::types::Table;

fn is_table_line(line: &Line<'_>) -> bool {
    let trimmed = line.text.trim();
    line.is_prose() && trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Every contiguous run of pipe lines with a header and at least one data row
pub fn extract(text: &str) -> Vec<Table> {
    let lines = scan_lines(text);
    let mut tables = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !is_table_line(&lines[i]) {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < lines.len() && is_table_line(&lines[i]) {
            i += 1;
        }
        if let Some(table) = build(text, &lines[run_start..i]) {
            tables.push(table);
        }
    }

    tables
}

fn build(text: &str, run: &[Line<'_>]) -> Option<Table> {
    let (first, last) = (run.first()?, run.last()?);
    let headers = parse_row(first.text);
    if headers.iter().all(String::is_empty) {
        debug!(line = first.text, "Skipping table without headers");
        return None;
    }

    let data_start = match run.get(1) {
        Some(line) if line.text.contains("---") => 2,
        _ => 1,
    };
    let rows: Vec<Vec<String>> = run[data_start.min(run.len())..]
        .iter()
        .map(|l| parse_row(l.text))
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    if rows.is_empty() {
        debug!(header = first.text, "Skipping table without data rows");
        return None;
    }

    Some(Table {
        headers,
        rows,
        context: heading_context(window_before(text, first.start, TABLE_CONTEXT_LOOKBACK)),
        raw: text[first.start..last.end()].to_string(),
    })
}

/// Nearest level-2 or level-3 heading in the lookback window
fn heading_context(window: &str) -> String {
    window
        .lines()
        .rev()
        .find_map(|l| regex!(r"^#{2,3}\s+(\S.*)$").captures(l.trim_start()))
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Split one table line into trimmed cells.
///
/// Outer pipes are dropped, empty cells are kept and `\|` stays inside its
/// cell as a literal pipe.
pub fn parse_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_SEPARATOR: &str = "## Types\n\n| Type | Meaning |\n|------|---------|\n| feat | New feature |\n| fix | Bug fix |\n| docs | Documentation |\n";

    #[test]
    fn test_table_with_separator() {
        let tables = extract(WITH_SEPARATOR);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["Type", "Meaning"]);
        assert_eq!(tables[0].rows.len(), 3);
        assert_eq!(tables[0].rows[2], vec!["docs", "Documentation"]);
        assert_eq!(tables[0].context, "Types");
    }

    #[test]
    fn test_table_without_separator_parses_identically() {
        let without = WITH_SEPARATOR.replace("|------|---------|\n", "");
        let a = extract(WITH_SEPARATOR);
        let b = extract(&without);
        assert_eq!(a[0].headers, b[0].headers);
        assert_eq!(a[0].rows, b[0].rows);
    }

    #[test]
    fn test_header_only_table_is_dropped() {
        assert!(extract("| a | b |\n|---|---|\n").is_empty());
        assert!(extract("| a | b |\n").is_empty());
    }

    #[test]
    fn test_tables_in_code_are_ignored() {
        let text = "```\n| a | b |\n| 1 | 2 |\n```\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_context_outside_window_is_empty() {
        let text = format!("## Far\n\n{}\n\n| a | b |\n| 1 | 2 |\n", "x".repeat(300));
        assert!(extract(&text)[0].context.is_empty());
    }

    #[test]
    fn test_context_window_counts_characters() {
        let text = format!("## 類型\n\n{}\n\n| a | b |\n| 1 | 2 |\n", "說".repeat(80));
        assert_eq!(extract(&text)[0].context, "類型");
    }

    #[test]
    fn test_raw_spans_table_lines() {
        let tables = extract("intro\n| a | b |\n| 1 | 2 |\noutro\n");
        assert_eq!(tables[0].raw, "| a | b |\n| 1 | 2 |");
    }

    #[test]
    fn test_parse_row_keeps_empty_cells_and_escaped_pipes() {
        assert_eq!(parse_row("| | b |"), vec!["", "b"]);
        assert_eq!(parse_row("| a \\| b | c |"), vec!["a | b", "c"]);
        assert_eq!(parse_row("  |x|y|  "), vec!["x", "y"]);
    }
}
