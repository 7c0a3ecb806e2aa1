//! TUI configuration from TOML (`[tui]` section)

use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_rate_ms = 250
/// flash_duration_secs = 4
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw tick in milliseconds
    pub tick_rate_ms: u64,
    /// How long status bar messages stay visible
    pub flash_duration_secs: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            flash_duration_secs: 4,
        }
    }
}

impl FileTuiConfig {
    /// Tick rate, falling back to the default when zero.
    pub fn tick_rate(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.tick_rate_ms == 0 {
            let issue = ConfigIssue::out_of_range("tui.tick_rate_ms", 0, DEFAULT_TICK_RATE_MS);
            (Duration::from_millis(DEFAULT_TICK_RATE_MS), vec![issue])
        } else {
            (Duration::from_millis(self.tick_rate_ms), vec![])
        }
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_secs(self.flash_duration_secs)
    }
}
