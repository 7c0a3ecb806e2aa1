//! Application-level configuration.
//!
//! - [`GameConfig`]: rule variant and post-round pause

pub mod game_config;

pub use game_config::GameConfig;
