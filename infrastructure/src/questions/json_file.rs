//! JSON file question source

use super::parse_questions;
use async_trait::async_trait;
use quiz_application::{QuestionSource, QuestionSourceError};
use quiz_domain::Question;
use std::path::PathBuf;
use tracing::debug;

/// Reads the question list from a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileQuestionSource {
    path: PathBuf,
}

impl JsonFileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for JsonFileQuestionSource {
    async fn load(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let location = self.describe();
        debug!("Reading questions from {}", location);
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| QuestionSourceError::Io {
                location: location.clone(),
                message: e.to_string(),
            })?;
        parse_questions(&location, &bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"[
                {"question": "Who fell asleep first on our first date?"},
                {"question": "Tea or coffee?", "options": ["Tea", "Coffee"]}
            ]"#,
        )
        .unwrap();

        let questions = JsonFileQuestionSource::new(&path).load().await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].text(),
            "Who fell asleep first on our first date?"
        );
        assert!(questions[1].options().is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileQuestionSource::new(dir.path().join("missing.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, QuestionSourceError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "[{\"question\": ").unwrap();
        let err = JsonFileQuestionSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, QuestionSourceError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_empty_array_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "[]").unwrap();
        let questions = JsonFileQuestionSource::new(&path).load().await.unwrap();
        assert!(questions.is_empty());
    }
}
