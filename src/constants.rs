//! Global Constants
//!
//! Centralized constants for parsing, extraction and serialization.
//! All magic numbers should be defined here with documentation.

/// Structural parser constants
pub mod parser {
    /// Metadata fields are only searched for in this many leading lines
    pub const METADATA_LINES: usize = 15;

    /// Lookback window (characters) for a table's preceding heading
    pub const TABLE_CONTEXT_LOOKBACK: usize = 200;

    /// Lookback window (characters) for a code block's preceding line
    pub const CODE_CONTEXT_LOOKBACK: usize = 300;

    /// Characters captured around a "choose one" phrase (before, after)
    pub const DECISION_CONTEXT_WINDOW: (usize, usize) = (100, 200);

    /// Language tag used for fences without an info string
    pub const DEFAULT_CODE_LANGUAGE: &str = "text";
}

/// Rule and reference extraction constants
pub mod extract {
    /// Maximum rules kept per document
    pub const MAX_RULES: usize = 15;

    /// Characters of the case-folded instruction used for deduplication
    pub const DEDUP_PREFIX_CHARS: usize = 30;

    /// Accepted instruction length range (characters, inclusive)
    pub const MIN_INSTRUCTION_CHARS: usize = 10;
    pub const MAX_INSTRUCTION_CHARS: usize = 100;

    /// Free-text subsection values are truncated to this many characters
    pub const TEXT_CAP: usize = 200;

    /// A subsection becomes a list only with more than this many bullets
    pub const MIN_LIST_ITEMS: usize = 2;

    /// Quick-reference key when neither context nor header is usable
    pub const FALLBACK_TABLE_KEY: &str = "reference-table";

    /// Question attached to every option decision matrix
    pub const DECISION_QUESTION: &str = "Which option best fits your project?";
}

/// YAML writer constants
pub mod yaml {
    /// Spaces per nesting level
    pub const INDENT: usize = 2;

    /// Arrays with at most this many items may be written inline
    pub const INLINE_MAX_ITEMS: usize = 5;

    /// Inline array items must be shorter than this (characters)
    pub const INLINE_MAX_ITEM_CHARS: usize = 50;
}

/// Manual additions block markers
pub mod manual {
    pub const START_MARKER: &str = "# MANUAL ADDITIONS START";
    pub const END_MARKER: &str = "# MANUAL ADDITIONS END";
    pub const HINT_LINE: &str = "# Add custom rules below this line";
}

/// Output layout constants
pub mod output {
    /// Extension of generated files
    pub const FILE_SUFFIX: &str = ".ai.yaml";

    /// Directory used when no path-prefix rule matches
    pub const DEFAULT_DIR: &str = "ai/standards";

    /// Version written when the source declares none
    pub const DEFAULT_VERSION: &str = "1.0.0";
}
