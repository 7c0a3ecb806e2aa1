//! Configuration file loading for couple-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./couple-quiz.toml` or `./.couple-quiz.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/couple-quiz/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGameConfig, FileLogConfig, FileQuestionsConfig, FileTuiConfig,
};
pub use loader::{ConfigError, ConfigLoader, ConfigSource};
