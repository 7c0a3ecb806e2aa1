//! Presentation-level configuration

use std::time::Duration;

/// Terminal UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiConfig {
    /// Redraw / flash expiry tick
    pub tick_rate: Duration,
    /// How long a status bar flash message stays visible
    pub flash_duration: Duration,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            flash_duration: Duration::from_secs(4),
        }
    }
}

impl TuiConfig {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_flash_duration(mut self, flash_duration: Duration) -> Self {
        self.flash_duration = flash_duration;
        self
    }
}
