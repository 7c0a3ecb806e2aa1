//! Load Questions use case.
//!
//! Retrieves the question list once. A failed load is logged and degrades
//! to an empty list; the game stays playable (as "Question 1 of 0").

use crate::ports::question_source::QuestionSource;
use quiz_domain::Question;
use std::sync::Arc;
use tracing::{error, info};

/// Output of [`LoadQuestionsUseCase`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadQuestionsOutput {
    /// Loaded questions, empty on failure
    pub questions: Vec<Question>,
    /// Why the load failed, if it did
    pub failure: Option<String>,
}

/// Use case for loading the question list from a [`QuestionSource`].
pub struct LoadQuestionsUseCase<S: QuestionSource + ?Sized> {
    source: Arc<S>,
}

impl<S: QuestionSource + ?Sized> LoadQuestionsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Load the questions. Never fails.
    pub async fn execute(&self) -> LoadQuestionsOutput {
        let location = self.source.describe();
        match self.source.load().await {
            Ok(questions) => {
                info!("Loaded {} questions from {}", questions.len(), location);
                LoadQuestionsOutput {
                    questions,
                    failure: None,
                }
            }
            Err(e) => {
                error!("Could not load questions: {}", e);
                LoadQuestionsOutput {
                    questions: Vec::new(),
                    failure: Some(e.to_string()),
                }
            }
        }
    }
}
