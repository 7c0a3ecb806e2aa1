//! HTTP question source

use super::parse_questions;
use async_trait::async_trait;
use quiz_application::{QuestionSource, QuestionSourceError};
use quiz_domain::Question;
use tracing::debug;

/// Fetches the question list from a URL with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    url: String,
    client: reqwest::Client,
}

impl HttpQuestionSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn http_error(&self, e: reqwest::Error) -> QuestionSourceError {
        QuestionSourceError::Http {
            location: self.url.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn load(&self) -> Result<Vec<Question>, QuestionSourceError> {
        debug!("Fetching questions from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuestionSourceError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.http_error(e))?;
        parse_questions(&self.url, &bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
