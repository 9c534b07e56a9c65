//! Source and output file discovery
//!
//! Walks a directory with `ignore` (honouring `.gitignore`) and keeps files
//! whose root-relative path matches one of a set of glob patterns.

use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::constants::output::FILE_SUFFIX;
use crate::types::{ConvertError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

pub struct DocumentScanner {
    root: PathBuf,
    patterns: Vec<String>,
}

impl DocumentScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            patterns: vec!["**/*".to_string()],
        }
    }

    /// Standards under `<core_dir>/`, plus each configured
    /// `<locales_dir>/<locale>/<core_dir>/` when `include_locales` is set
    pub fn sources(config: &Config, include_locales: bool) -> Self {
        let source = &config.source;
        let mut patterns = vec![format!("{}/*.md", source.core_dir)];
        if include_locales {
            patterns.extend(source.locales.iter().map(|locale| {
                format!("{}/{}/{}/*.md", source.locales_dir, locale, source.core_dir)
            }));
        }
        Self::new(&source.root).with_patterns(patterns)
    }

    /// Every generated file below `dir`
    pub fn outputs<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir).with_patterns(vec![format!("**/*{}", FILE_SUFFIX)])
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Matching paths relative to the root, sorted
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(ConvertError::source(&self.root, "Directory not found"));
        }

        let patterns: Vec<Pattern> = self
            .patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .map_err(|e| ConvertError::Config(format!("Invalid pattern '{}': {}", p, e)))
            })
            .collect::<Result<_>>()?;

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&self.root).ok()?.to_path_buf();
                patterns
                    .iter()
                    .any(|p| p.matches_path_with(&relative, MATCH_OPTIONS))
                    .then_some(relative)
            })
            .collect();

        files.sort();
        debug!(root = %self.root.display(), count = files.len(), "Scanned files");
        Ok(files)
    }
}
