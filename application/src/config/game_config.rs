//! Game parameters: controller behavior.

use quiz_domain::GameVariant;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause between a completed round and the next screen.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(1500);

/// Parameters for [`GameController`](crate::use_cases::game_controller::GameController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Scoring rule set.
    pub variant: GameVariant,
    /// Time the feedback message stays up before the game advances.
    pub transition_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::default(),
            transition_delay: DEFAULT_TRANSITION_DELAY,
        }
    }
}

impl GameConfig {
    // ==================== Builder Methods ====================

    pub fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }
}
