//! Source → output directory resolution

use std::path::{Component, Path};

/// A source directory and the output directory its documents go to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRule {
    pub prefix: String,
    pub dir: String,
}

/// Rules for the generic core directory and every configured locale,
/// sorted longest prefix first
pub fn output_rules(
    core_dir: &str,
    locales_dir: &str,
    locales: &[String],
    default_dir: &str,
) -> Vec<OutputRule> {
    let mut rules = vec![OutputRule {
        prefix: core_dir.trim_matches('/').to_string(),
        dir: default_dir.to_string(),
    }];
    for locale in locales {
        rules.push(OutputRule {
            prefix: format!("{}/{}/{}", locales_dir.trim_matches('/'), locale, core_dir.trim_matches('/')),
            dir: format!("{}/{}/{}", locales_dir.trim_matches('/'), locale, default_dir),
        });
    }
    rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    rules
}

/// `/`-joined normal components of a path
fn segments(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Output directory for a source file: the longest rule whose prefix is a
/// whole-segment suffix of the file's directory, else `fallback`
pub fn output_dir<'a>(rules: &'a [OutputRule], relative_path: &Path, fallback: &'a str) -> &'a str {
    let parent = relative_path.parent().map(segments).unwrap_or_default();
    rules
        .iter()
        .find(|rule| parent == rule.prefix || parent.ends_with(&format!("/{}", rule.prefix)))
        .map_or(fallback, |rule| rule.dir.as_str())
}

/// Locale named by a `<locales_dir>/<locale>/` segment pair
pub fn locale_of(locales_dir: &str, relative_path: &Path) -> Option<String> {
    let parts = segments(relative_path);
    let parts: Vec<&str> = parts.split('/').collect();
    parts
        .windows(3)
        .find(|w| w[0] == locales_dir)
        .map(|w| w[1].to_string())
}

/// Repository-relative source path recorded in `meta.source`
pub fn source_path(core_dir: &str, locales_dir: &str, filename: &str, locale: Option<&str>) -> String {
    match locale {
        Some(locale) => format!("{}/{}/{}/{}", locales_dir, locale, core_dir, filename),
        None => format!("{}/{}", core_dir, filename),
    }
}
