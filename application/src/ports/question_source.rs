//! Question source port
//!
//! Defines the interface for retrieving the ordered question list.

use async_trait::async_trait;
use quiz_domain::Question;
use thiserror::Error;

/// Errors that can occur while loading questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionSourceError {
    #[error("Failed to read {location}: {message}")]
    Io { location: String, message: String },

    #[error("Malformed question list in {location}: {message}")]
    Parse { location: String, message: String },

    #[error("Request to {location} failed: {message}")]
    Http { location: String, message: String },

    #[error("{location} responded with HTTP {status}")]
    Status { location: String, status: u16 },
}

/// Source of the question list
///
/// Loaded once at startup. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Retrieve the full, ordered question list
    async fn load(&self) -> Result<Vec<Question>, QuestionSourceError>;

    /// Where the questions come from, for logs and messages
    fn describe(&self) -> String;
}
