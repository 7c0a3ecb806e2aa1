//! Game configuration from TOML (`[game]` section)

use quiz_application::GameConfig;
use quiz_domain::{ConfigIssue, GameVariant};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// variant = "self-judged"        # "self-judged" or "matching"
/// transition_delay_ms = 1500
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Scoring variant: "self-judged" or "matching"
    pub variant: String,
    /// Pause after a completed round, in milliseconds
    pub transition_delay_ms: u64,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::default().to_string(),
            transition_delay_ms: 1500,
        }
    }
}

impl FileGameConfig {
    /// Parse variant string into GameVariant, returning warnings on failure.
    pub fn parse_variant(&self) -> (GameVariant, Vec<ConfigIssue>) {
        match self.variant.parse::<GameVariant>() {
            Ok(variant) => (variant, vec![]),
            Err(_) => {
                let issue =
                    ConfigIssue::invalid_enum_value("game.variant", &self.variant, &GameVariant::NAMES);
                (GameVariant::default(), vec![issue])
            }
        }
    }

    /// Convert to the application-level config.
    pub fn to_game_config(&self) -> (GameConfig, Vec<ConfigIssue>) {
        let (variant, issues) = self.parse_variant();
        let config = GameConfig::default()
            .with_variant(variant)
            .with_transition_delay(Duration::from_millis(self.transition_delay_ms));
        (config, issues)
    }
}
