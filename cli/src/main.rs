//! CLI entrypoint for Couple Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use quiz_application::GameConfig;
use quiz_domain::{ConfigIssue, ConfigIssueCode};
use quiz_infrastructure::{ConfigLoader, FileConfig, question_source_for};
use quiz_presentation::{Cli, TuiApp, TuiConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Everything the TUI needs, after merging config files and CLI flags
#[derive(Debug)]
struct Settings {
    game: GameConfig,
    tui: TuiConfig,
    questions: String,
    log_file: Option<PathBuf>,
    issues: Vec<ConfigIssue>,
}

impl Settings {
    fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        let mut issues = file.validate();

        let (mut game, _) = file.game.to_game_config();
        if let Some(variant) = cli.variant {
            game = game.with_variant(variant);
        }
        if let Some(delay_ms) = cli.delay_ms {
            game = game.with_transition_delay(Duration::from_millis(delay_ms));
        }

        let (tick_rate, _) = file.tui.tick_rate();
        let tui = TuiConfig::default()
            .with_tick_rate(tick_rate)
            .with_flash_duration(file.tui.flash_duration());

        // An explicit --questions makes a blank [questions] source irrelevant
        let questions = match &cli.questions {
            Some(location) => {
                issues.retain(|issue| {
                    !matches!(
                        &issue.code,
                        ConfigIssueCode::MissingValue { field } if field == "questions.source"
                    )
                });
                location.clone()
            }
            None => file.questions.source.clone(),
        };

        Self {
            game,
            tui,
            questions,
            log_file: cli.log_file.clone().or_else(|| file.log.file.clone()),
            issues,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    let settings = Settings::resolve(&cli, &file_config);

    let _log_guard = match &settings.log_file {
        Some(path) => Some(init_logging(cli.verbose, path)?),
        None => None,
    };

    info!("Starting Couple Quiz");

    let mut fatal = false;
    for issue in &settings.issues {
        if issue.is_fatal() {
            eprintln!("{} {}", "error:".red().bold(), issue.message);
            fatal = true;
        } else {
            warn!("{}", issue.message);
        }
    }
    if fatal {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    let source = question_source_for(&settings.questions);
    info!(
        "Variant: {}, questions: {}, transition delay: {:?}",
        settings.game.variant,
        source.describe(),
        settings.game.transition_delay
    );

    TuiApp::new(&settings.game, source, settings.tui)
        .run()
        .await
        .context("Terminal UI failed")?;

    Ok(())
}

/// Initialize file logging based on verbosity level.
///
/// The returned guard flushes buffered lines on drop and must be held
/// for the lifetime of the process.
fn init_logging(verbose: u8, path: &Path) -> Result<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

fn print_config_sources(config_path: Option<&PathBuf>) {
    println!("{}", "Configuration sources (highest priority first):".bold());
    for source in ConfigLoader::sources(config_path) {
        let status = if source.found {
            "found".green()
        } else {
            "not found".dimmed()
        };
        println!(
            "  {:<9} {} ({})",
            source.label,
            source.path.display(),
            status
        );
    }
}
