//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-valued fields stay strings here and are parsed with warnings, so a
//! typo falls back to a default instead of refusing to start.

mod game;
mod log;
mod questions;
mod tui;

pub use game::FileGameConfig;
pub use log::FileLogConfig;
pub use questions::FileQuestionsConfig;
pub use tui::FileTuiConfig;

use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game rules
    pub game: FileGameConfig,
    /// Question list location
    pub questions: FileQuestionsConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Log output
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.game.to_game_config().1);
        issues.extend(self.questions.validate());
        issues.extend(self.tui.tick_rate().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[game]
variant = "matching"
transition_delay_ms = 2000

[questions]
source = "data/questions.json"

[tui]
tick_rate_ms = 100
flash_duration_secs = 2

[log]
file = "/tmp/couple-quiz.log"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.variant, "matching");
        assert_eq!(config.game.transition_delay_ms, 2000);
        assert_eq!(config.questions.source, "data/questions.json");
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.tui.flash_duration_secs, 2);
        assert_eq!(
            config.log.file.as_deref(),
            Some(std::path::Path::new("/tmp/couple-quiz.log"))
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.variant, "self-judged");
        assert!(config.log.file.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[game]
variant = "trivia"

[questions]
source = "  "

[tui]
tick_rate_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues.iter().filter(|i| i.severity == Severity::Error).count(),
            1
        );
    }
}
