//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
///
/// The TUI owns the terminal, so logs only go to a file.
///
/// ```toml
/// [log]
/// file = "couple-quiz.log"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Log file path; logging is off when unset
    pub file: Option<PathBuf>,
}
