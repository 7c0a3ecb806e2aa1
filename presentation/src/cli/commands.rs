//! CLI command definitions

use clap::Parser;
use quiz_domain::GameVariant;
use std::path::PathBuf;

/// CLI arguments for couple-quiz
#[derive(Parser, Debug)]
#[command(name = "couple-quiz")]
#[command(author, version, about = "A two-player quiz for couples, played in the terminal")]
#[command(long_about = r#"
Couple Quiz asks two partners the same questions and keeps score.

Game variants:
  self-judged   Each partner marks their own answer correct or incorrect
  matching      Both partners pick one of two choices; a match scores for both

Configuration files are loaded from (in priority order):
1. --config <path>                              Explicit config file
2. ./couple-quiz.toml or ./.couple-quiz.toml    Project-level config
3. ~/.config/couple-quiz/config.toml            Global config

Example:
  couple-quiz
  couple-quiz --questions my-questions.json --variant matching
  couple-quiz --questions https://example.com/questions.json -vv --log-file quiz.log
"#)]
pub struct Cli {
    /// Question list to load (JSON file path or http(s) URL)
    #[arg(short, long, value_name = "PATH|URL")]
    pub questions: Option<String>,

    /// Game variant: self-judged or matching
    #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<GameVariant>,

    /// Delay before moving on after both partners answered, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (the terminal is owned by the game screen)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_variant(value: &str) -> Result<GameVariant, String> {
    value.parse::<GameVariant>().map_err(|e| e.to_string())
}
