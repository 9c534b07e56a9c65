use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aiyaml::cli::CommandContext;
use aiyaml::cli::commands::convert::{ConvertOptions, Mode};

#[derive(Parser)]
#[command(name = "aiyaml")]
#[command(
    version,
    about = "Convert Markdown development standards into AI-YAML"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra config file layered over the project config
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert standards into .ai.yaml files
    Convert {
        #[arg(help = "Source files to convert")]
        files: Vec<PathBuf>,
        #[arg(long, short, help = "Convert every standard in the core directory")]
        all: bool,
        #[arg(long, help = "Also convert translated standards")]
        locales: bool,
        #[arg(long, conflicts_with = "check", help = "Print output instead of writing")]
        preview: bool,
        #[arg(long, help = "Report outputs that are out of date without writing")]
        check: bool,
        #[arg(long, help = "Discard manual additions in existing outputs")]
        no_preserve: bool,
        #[arg(long, short, help = "Write outputs below this directory")]
        output_dir: Option<PathBuf>,
    },

    /// Validate generated .ai.yaml files
    Validate {
        #[arg(help = "Directory to scan (default: repository root)")]
        dir: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Print the parsed structure of a standard as JSON
    Parse {
        #[arg(help = "Markdown file to parse")]
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31maiyaml encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    use aiyaml::cli::commands;

    // Global config init must work even when the project config is broken
    if let Commands::Config {
        action: ConfigAction::Init { global: true, force },
    } = cli.command
    {
        commands::config::init_global(force)?;
        return Ok(());
    }

    let ctx = CommandContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            files,
            all,
            locales,
            preview,
            check,
            no_preserve,
            output_dir,
        } => {
            let mode = if preview {
                Mode::Preview
            } else if check {
                Mode::Check
            } else {
                Mode::Write
            };
            commands::convert::run(
                &ctx,
                &ConvertOptions {
                    files,
                    all,
                    locales,
                    mode,
                    no_preserve,
                    output_dir,
                },
            )?;
        }
        Commands::Validate { dir, format } => {
            commands::validate::run(&ctx, dir.as_deref(), &format)?;
        }
        Commands::Parse { file } => {
            commands::parse::run(&ctx, &file)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                commands::config::show(&ctx, &format)?;
            }
            ConfigAction::Path => {
                commands::config::path(&ctx)?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    commands::config::init_global(force)?;
                } else {
                    commands::config::init_project(&ctx, force)?;
                }
            }
        },
    }

    Ok(())
}
