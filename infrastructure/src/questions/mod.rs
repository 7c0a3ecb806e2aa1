//! Question source adapters
//!
//! Implementations of [`QuestionSource`] for the JSON question list:
//!
//! - [`JsonFileQuestionSource`]: a local file, read with `tokio::fs`
//! - [`HttpQuestionSource`]: a remote URL (feature `http-source`)
//!
//! Both expect a JSON array of `{ "question": "..." }` objects; an
//! optional `"options": ["...", "..."]` pair is used by the matching variant.

mod json_file;
#[cfg(feature = "http-source")]
mod http;

pub use json_file::JsonFileQuestionSource;
#[cfg(feature = "http-source")]
pub use http::HttpQuestionSource;

use quiz_application::{QuestionSource, QuestionSourceError};
use quiz_domain::Question;
use std::sync::Arc;
use tracing::warn;

/// Pick an adapter for a configured location.
///
/// `http://` and `https://` locations use the HTTP adapter when the
/// `http-source` feature is enabled; everything else is treated as a path.
pub fn question_source_for(location: &str) -> Arc<dyn QuestionSource> {
    #[cfg(feature = "http-source")]
    {
        if is_url(location) {
            return Arc::new(HttpQuestionSource::new(location));
        }
    }

    Arc::new(JsonFileQuestionSource::new(location))
}

#[cfg_attr(not(feature = "http-source"), allow(dead_code))]
pub(crate) fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Parse a JSON question list, dropping blank entries.
pub(crate) fn parse_questions(
    location: &str,
    bytes: &[u8],
) -> Result<Vec<Question>, QuestionSourceError> {
    let questions: Vec<Question> =
        serde_json::from_slice(bytes).map_err(|e| QuestionSourceError::Parse {
            location: location.to_string(),
            message: e.to_string(),
        })?;

    let total = questions.len();
    let questions: Vec<Question> = questions.into_iter().filter(|q| !q.is_blank()).collect();
    if questions.len() < total {
        warn!(
            "Skipped {} blank question(s) in {}",
            total - questions.len(),
            location
        );
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_questions_skips_blank() {
        let json = br#"[{"question": "Q1"}, {"question": "   "}, {"question": "Q3"}]"#;
        let questions = parse_questions("test", json).unwrap();
        let texts: Vec<&str> = questions.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["Q1", "Q3"]);
    }

    #[test]
    fn test_parse_questions_rejects_non_array() {
        let err = parse_questions("test", br#"{"question": "Q1"}"#).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Parse { .. }));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/questions.json"));
        assert!(is_url("http://localhost:3000/questions.json"));
        assert!(!is_url("questions.json"));
        assert!(!is_url("/srv/http/questions.json"));
    }

    #[test]
    fn test_question_source_for_path() {
        let source = question_source_for("questions.json");
        assert_eq!(source.describe(), "questions.json");
    }
}
