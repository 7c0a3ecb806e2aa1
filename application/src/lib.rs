//! Application layer for couple-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameConfig;
pub use ports::{
    question_source::{QuestionSource, QuestionSourceError},
    ui_event::UiEvent,
};
pub use use_cases::game_controller::GameController;
pub use use_cases::load_questions::{LoadQuestionsOutput, LoadQuestionsUseCase};
