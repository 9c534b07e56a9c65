use super::{scan_lines, window_before};
use crate::constants::parser::{CODE_CONTEXT_LOOKBACK, DEFAULT_CODE_LANGUAGE};
use crate::types::CodeBlock;

/// Fenced code blocks in source order
pub fn extract(text: &str) -> Vec<CodeBlock> {
    let lines = scan_lines(text);
    let mut blocks = Vec::new();

    let mut open: Option<(usize, &str)> = None;
    let mut body: Vec<&str> = Vec::new();
    for line in &lines {
        if line.in_code {
            body.push(line.text);
            continue;
        }
        if !line.is_fence {
            continue;
        }
        match open.take() {
            None => {
                let info = line.text.trim_start().trim_start_matches('`').trim();
                let language = info.split_whitespace().next().unwrap_or(DEFAULT_CODE_LANGUAGE);
                open = Some((line.start, language));
                body.clear();
            }
            Some((start, language)) => blocks.push(CodeBlock {
                language: language.to_string(),
                content: body.join("\n").trim().to_string(),
                context: preceding_line(window_before(text, start, CODE_CONTEXT_LOOKBACK)),
            }),
        }
    }

    blocks
}

fn preceding_line(window: &str) -> String {
    window
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string()
}
