//! Infrastructure layer for couple-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, and configuration file loading.

pub mod config;
pub mod questions;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigSource, FileConfig, FileGameConfig, FileLogConfig,
    FileQuestionsConfig, FileTuiConfig,
};
#[cfg(feature = "http-source")]
pub use questions::HttpQuestionSource;
pub use questions::{JsonFileQuestionSource, question_source_for};
