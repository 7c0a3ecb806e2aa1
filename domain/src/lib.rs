//! Domain layer for couple-quiz
//!
//! This crate contains the game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round Resolution
//!
//! The whole game is one value, [`GameState`], advanced by a reducer:
//! `GameState::apply(event) -> Reduction { state, effects }`. The engine
//! never sleeps or spawns; scheduling the post-round pause is an
//! [`Effect`] the caller performs and answers with
//! [`GameEvent::AdvanceRound`].
//!
//! ## Variants
//!
//! - **SelfJudged** (default): each partner marks their own answer right or wrong
//! - **Matching**: both partners pick a name; agreement scores for both

pub mod config;
pub mod core;
pub mod game;
pub mod participant;
pub mod round;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, question::Question};
pub use game::{
    Effect, Feedback, GameEvent, GameState, Outcome, Reduction, Screen, SetupError, validate_names,
};
pub use participant::{Participant, ParticipantId, Participants};
pub use round::{
    AnswerPayload, GameVariant, MatchingRule, RoundAnswer, RoundStatus, ScoringRule,
    SelfJudgedRule,
};
