//! Batch conversion and validation against a temporary repository.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use aiyaml::Config;
use aiyaml::cli::CommandContext;
use aiyaml::cli::commands::convert::{self, ConvertOptions, Mode, UnitStatus};
use aiyaml::cli::commands::validate;
use aiyaml::constants::manual::{END_MARKER, HINT_LINE, START_MARKER};
use aiyaml::types::ConvertError;
use common::{CHECKIN_STANDARDS, TESTING_STANDARDS, write};
use tempfile::TempDir;

fn repository() -> (TempDir, CommandContext) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "core/testing-standards.md", TESTING_STANDARDS);
    write(dir.path(), "core/checkin-standards.md", CHECKIN_STANDARDS);
    write(dir.path(), "locales/zh-TW/core/testing-standards.md", TESTING_STANDARDS);
    write(dir.path(), "core/README.txt", "not a standard");

    let mut config = Config::default();
    config.conversion.workers = 3;
    let ctx = CommandContext::new(dir.path(), config, "2026-03-01");
    (dir, ctx)
}

fn options(mode: Mode) -> ConvertOptions {
    ConvertOptions {
        all: true,
        locales: true,
        mode,
        ..Default::default()
    }
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn test_batch_writes_core_and_locale_outputs() {
    let (dir, ctx) = repository();
    let summary = convert::execute(&ctx, &options(Mode::Write)).unwrap();
    summary.status().unwrap();

    let sources: Vec<_> = summary.reports.iter().map(|r| r.source.clone()).collect();
    assert_eq!(
        sources,
        vec![
            PathBuf::from("core/checkin-standards.md"),
            PathBuf::from("core/testing-standards.md"),
            PathBuf::from("locales/zh-TW/core/testing-standards.md"),
        ]
    );

    let core = read(dir.path(), "ai/standards/testing.ai.yaml");
    assert!(core.contains("source: core/testing-standards.md\n"));

    let locale = read(dir.path(), "locales/zh-TW/ai/standards/testing.ai.yaml");
    assert!(locale.contains("  language: zh-TW\n"));
    assert!(locale.contains("source: locales/zh-TW/core/testing-standards.md"));

    let checkin = read(dir.path(), "ai/standards/checkin.ai.yaml");
    assert!(checkin.contains("instruction: MUST NOT commit generated files\n"));

    let tally = summary.tally();
    assert_eq!(tally.ok, 3);
    assert_eq!(tally.failed, 0);
}

#[test]
fn test_manual_additions_survive_regeneration() {
    let (dir, ctx) = repository();
    convert::execute(&ctx, &options(Mode::Write)).unwrap();

    let output = dir.path().join("ai/standards/testing.ai.yaml");
    let mut edited = fs::read_to_string(&output).unwrap();
    edited.push_str(&format!(
        "\n{}\n{}\ncustom:\n  - keep this\n{}\n",
        START_MARKER, HINT_LINE, END_MARKER
    ));
    fs::write(&output, &edited).unwrap();

    let summary = convert::execute(&ctx, &options(Mode::Write)).unwrap();
    let testing = summary
        .outcomes()
        .find(|o| o.output == Path::new("ai/standards/testing.ai.yaml"))
        .unwrap();
    assert!(testing.manual_preserved);
    assert_eq!(testing.status, UnitStatus::Unchanged);
    assert_eq!(fs::read_to_string(&output).unwrap(), edited);

    let again = convert::execute(&ctx, &options(Mode::Write)).unwrap();
    assert!(again.outcomes().all(|o| o.status == UnitStatus::Unchanged));
}

#[test]
fn test_no_preserve_drops_manual_block() {
    let (dir, ctx) = repository();
    convert::execute(&ctx, &options(Mode::Write)).unwrap();

    let output = dir.path().join("ai/standards/checkin.ai.yaml");
    let mut edited = fs::read_to_string(&output).unwrap();
    edited.push_str(&format!("\n{}\nextra: 1\n{}\n", START_MARKER, END_MARKER));
    fs::write(&output, edited).unwrap();

    let opts = ConvertOptions {
        no_preserve: true,
        ..options(Mode::Write)
    };
    convert::execute(&ctx, &opts).unwrap().status().unwrap();
    assert!(!read(dir.path(), "ai/standards/checkin.ai.yaml").contains(START_MARKER));
}

#[test]
fn test_check_mode_detects_drift_without_writing() {
    let (dir, ctx) = repository();
    convert::execute(&ctx, &options(Mode::Write)).unwrap();
    assert!(convert::execute(&ctx, &options(Mode::Check)).unwrap().status().is_ok());

    write(
        dir.path(),
        "core/checkin-standards.md",
        &format!("{}- SHOULD write a clear message\n", CHECKIN_STANDARDS),
    );
    let before = read(dir.path(), "ai/standards/checkin.ai.yaml");
    let summary = convert::execute(&ctx, &options(Mode::Check)).unwrap();
    assert!(matches!(summary.status(), Err(ConvertError::Drift { count: 1 })));
    assert_eq!(read(dir.path(), "ai/standards/checkin.ai.yaml"), before);
}

#[test]
fn test_generated_outputs_validate() {
    let (dir, ctx) = repository();
    convert::execute(&ctx, &options(Mode::Write)).unwrap();
    write(dir.path(), "ai/standards/broken.ai.yaml", "rules: []\n");

    let report = validate::execute(dir.path()).unwrap();
    assert_eq!(report.valid, 3);
    assert_eq!(report.invalid, 1);
    let broken = report.files.iter().find(|f| !f.valid).unwrap();
    assert_eq!(broken.path, "ai/standards/broken.ai.yaml");
}
