//! aiyaml - Markdown Standards to AI-YAML Converter
//!
//! Converts development standards written as headed Markdown (tables, code
//! blocks, imperative rule statements) into compact `.ai.yaml` documents
//! for automated agents. Regeneration is repeatable: a hand-maintained
//! block at the end of an existing output survives every rerun.
//!
//! ## Pipeline
//!
//! ```text
//! Markdown ─parse─▶ ParsedDocument ─extract─▶ rules / tables / options
//!                                  ─emit────▶ AiYamlDocument ─render─▶ text
//!                                                            ─merge──▶ .ai.yaml
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use aiyaml::{Config, ConversionInput, Converter};
//!
//! let converter = Converter::from_config(&Config::default(), "2026-03-01");
//! let conversion = converter.convert(&ConversionInput {
//!     relative_path: "core/testing-standards.md".into(),
//!     text: std::fs::read_to_string("core/testing-standards.md")?,
//!     prior: None,
//! })?;
//! std::fs::write(&conversion.output_path, conversion.rendered)?;
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: structural Markdown parser
//! - [`classify`]: ids, priorities, triggers and output paths
//! - [`extract`]: rules, quick references and option sets
//! - [`emitter`]: output IR assembly and the YAML writer
//! - [`manual`]: manual-additions block round trip
//! - [`pipeline`]: one conversion unit end to end

#[macro_use]
mod macros;

pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod emitter;
pub mod extract;
pub mod manual;
pub mod parser;
pub mod pipeline;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ConvertError, Result, ResultExt};

// IR
pub use types::{AiYamlDocument, ParsedDocument, Priority};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use classify::ClassificationRules;
pub use discovery::DocumentScanner;
pub use emitter::{ConversionContext, emit, render};
pub use extract::{Extracted, Limits, extract};
pub use manual::{ManualSection, extract_manual, merge_manual};
pub use parser::parse;
pub use pipeline::{Conversion, ConversionInput, Converter, ConverterOptions};
