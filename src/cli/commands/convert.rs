//! Convert Command
//!
//! Converts Markdown standards into `.ai.yaml` files.
//!
//! Usage:
//!   aiyaml convert [FILES...] [--all] [--locales]
//!   aiyaml convert --all --check
//!   aiyaml convert core/testing-standards.md --preview

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::cli::ui::{Output, Tally};
use crate::cli::util::{CommandContext, read_optional, relative_to};
use crate::discovery::DocumentScanner;
use crate::pipeline::{ConversionInput, Converter};
use crate::types::{ConvertError, Result, ResultExt};

/// What to do with each freshly rendered document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Write outputs that changed
    #[default]
    Write,
    /// Return the rendered text without touching the disk
    Preview,
    /// Compare with the on-disk output without writing
    Check,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Explicit source files, relative to the working directory
    pub files: Vec<PathBuf>,
    /// Discover every standard under the core directory
    pub all: bool,
    /// Also discover translated standards (implies discovery)
    pub locales: bool,
    pub mode: Mode,
    /// Drop manual blocks from prior outputs
    pub no_preserve: bool,
    /// Base directory for outputs instead of the repository root
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Written,
    Unchanged,
    Preview(String),
    /// Check mode: on-disk output matches
    Fresh,
    /// Check mode: on-disk output differs
    Drifted,
    /// Check mode: no output on disk yet
    Missing,
}

impl UnitStatus {
    pub fn is_drift(&self) -> bool {
        matches!(self, Self::Drifted | Self::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub id: String,
    /// Destination relative to the output base
    pub output: PathBuf,
    pub status: UnitStatus,
    pub manual_preserved: bool,
}

#[derive(Debug)]
pub struct UnitReport {
    /// Source path relative to the repository root
    pub source: PathBuf,
    pub result: Result<Outcome>,
}

/// Per-document results in input order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<UnitReport>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_err()).count()
    }

    pub fn drifted(&self) -> usize {
        self.outcomes().filter(|o| o.status.is_drift()).count()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.reports.iter().filter_map(|r| r.result.as_ref().ok())
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for report in &self.reports {
            match &report.result {
                Err(_) => tally.failed += 1,
                Ok(o) if o.status.is_drift() => tally.failed += 1,
                Ok(o) if matches!(o.status, UnitStatus::Unchanged | UnitStatus::Fresh) => {
                    tally.skipped += 1
                }
                Ok(_) => tally.ok += 1,
            }
        }
        tally
    }

    /// Failures take precedence over drift
    pub fn status(&self) -> Result<()> {
        let failed = self.failed();
        if failed > 0 {
            return Err(ConvertError::Batch {
                failed,
                total: self.reports.len(),
            });
        }
        let count = self.drifted();
        if count > 0 {
            return Err(ConvertError::Drift { count });
        }
        Ok(())
    }
}

/// Everything a worker needs for one unit
struct Job {
    converter: Converter,
    source_root: PathBuf,
    output_root: PathBuf,
    mode: Mode,
}

impl Job {
    fn run(&self, relative: &Path) -> Result<Outcome> {
        let source = self.source_root.join(relative);
        let text = fs::read_to_string(&source).with_path(&source, "Could not read source")?;

        let (_, output) = self.converter.plan(relative)?;
        let destination = self.output_root.join(&output);
        let prior = read_optional(&destination)?;

        let conversion = self.converter.convert(&ConversionInput {
            relative_path: relative.to_path_buf(),
            text,
            prior: prior.clone(),
        })?;

        let status = match self.mode {
            Mode::Preview => UnitStatus::Preview(conversion.rendered),
            Mode::Check => match prior {
                None => UnitStatus::Missing,
                Some(existing) if existing == conversion.rendered => UnitStatus::Fresh,
                Some(_) => UnitStatus::Drifted,
            },
            Mode::Write if prior.as_deref() == Some(conversion.rendered.as_str()) => {
                UnitStatus::Unchanged
            }
            Mode::Write => {
                if let Some(parent) = destination.parent() {
                    fs::create_dir_all(parent).with_path(parent, "Could not create directory")?;
                }
                fs::write(&destination, &conversion.rendered)
                    .with_path(&destination, "Could not write output")?;
                UnitStatus::Written
            }
        };

        Ok(Outcome {
            id: conversion.id,
            output,
            status,
            manual_preserved: conversion.manual_preserved,
        })
    }
}

/// Source paths relative to the repository root
pub fn select_sources(ctx: &CommandContext, opts: &ConvertOptions) -> Result<Vec<PathBuf>> {
    if opts.files.is_empty() && !opts.all && !opts.locales {
        return Err(ConvertError::Config(
            "No input files. Pass FILES or use --all".to_string(),
        ));
    }

    let mut sources: Vec<PathBuf> = opts
        .files
        .iter()
        .map(|file| relative_to(ctx.root(), &ctx.resolve(file)))
        .collect();

    if opts.all || opts.locales {
        let found = DocumentScanner::sources(&ctx.config, opts.locales).scan()?;
        for path in found {
            if !sources.contains(&path) {
                sources.push(path);
            }
        }
    }
    Ok(sources)
}

/// Convert every selected source and collect per-document results
pub fn execute(ctx: &CommandContext, opts: &ConvertOptions) -> Result<BatchSummary> {
    let sources = select_sources(ctx, opts)?;
    if sources.is_empty() {
        warn!("No standards found under {}", ctx.root().display());
        return Ok(BatchSummary::default());
    }

    let mut config = ctx.config.clone();
    if opts.no_preserve {
        config.output.preserve_manual = false;
    }
    let workers = config.effective_workers().max(1);

    let job = Arc::new(Job {
        converter: Converter::from_config(&config, ctx.today.as_str()),
        source_root: ctx.root().to_path_buf(),
        output_root: opts
            .output_dir
            .as_ref()
            .map(|dir| ctx.resolve(dir))
            .unwrap_or_else(|| ctx.root().to_path_buf()),
        mode: opts.mode,
    });

    info!(count = sources.len(), workers, mode = ?opts.mode, "Converting standards");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .max_blocking_threads(workers)
        .build()?;

    let reports = runtime.block_on(async {
        stream::iter(sources)
            .map(|source| {
                let job = Arc::clone(&job);
                async move {
                    let relative = source.clone();
                    let result = tokio::task::spawn_blocking(move || job.run(&relative))
                        .await
                        .map_err(|e| ConvertError::Join(e.to_string()))
                        .and_then(|r| r);
                    UnitReport { source, result }
                }
            })
            .buffered(workers)
            .collect::<Vec<_>>()
            .await
    });

    let summary = BatchSummary { reports };
    debug!(failed = summary.failed(), drifted = summary.drifted(), "Batch finished");
    Ok(summary)
}

/// Run the command and report each document on the console
pub fn run(ctx: &CommandContext, opts: &ConvertOptions) -> Result<()> {
    let output = Output::new();
    let summary = execute(ctx, opts)?;

    if opts.mode != Mode::Preview {
        output.header("Converting standards");
    }

    for report in &summary.reports {
        let source = report.source.display();
        match &report.result {
            Ok(outcome) => print_outcome(&output, &source.to_string(), outcome),
            Err(e) => output.error(&format!("{}: {}", source, e)),
        }
    }

    if opts.mode != Mode::Preview {
        output.tally(&summary.tally());
    }
    summary.status()
}

fn print_outcome(output: &Output, source: &str, outcome: &Outcome) {
    let target = outcome.output.display();
    let manual = if outcome.manual_preserved {
        " (manual additions kept)"
    } else {
        ""
    };
    match &outcome.status {
        UnitStatus::Written => output.success(&format!("{} → {}{}", source, target, manual)),
        UnitStatus::Unchanged => output.info(&format!("{} → {} (unchanged)", source, target)),
        UnitStatus::Preview(text) => {
            println!("# ---- {} → {}", source, target);
            print!("{}", text);
        }
        UnitStatus::Fresh => output.success(&format!("{} is up to date", target)),
        UnitStatus::Drifted => output.error(&format!("{} is out of date ({})", target, source)),
        UnitStatus::Missing => output.error(&format!("{} is missing ({})", target, source)),
    }
}
