//! Question list configuration from TOML (`[questions]` section)

use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw question list configuration from TOML
///
/// # Example
///
/// ```toml
/// [questions]
/// source = "questions.json"     # file path or http(s) URL
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// File path or URL of the JSON question list
    pub source: String,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            source: "questions.json".to_string(),
        }
    }
}

impl FileQuestionsConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.source.trim().is_empty() {
            vec![ConfigIssue::missing_value(
                "questions.source",
                "a question list path or URL is required",
            )]
        } else {
            vec![]
        }
    }
}
