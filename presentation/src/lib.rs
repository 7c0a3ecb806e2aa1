//! Presentation layer for couple-quiz
//!
//! This crate contains the CLI definition and the terminal UI
//! (setup, game and results screens).

pub mod cli;
pub mod config;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::TuiConfig;
pub use tui::TuiApp;
