//! Scoring rule strategies
//!
//! Both game variants share one state shape and one engine; they differ
//! only in which payloads they accept and how a recorded answer scores.

use super::answer::AnswerPayload;
use crate::core::error::DomainError;
use crate::game::state::GameState;
use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for scoring rule strategies
///
/// The engine checks the round guards (screen, transitioning, already
/// answered) before calling into a rule, so implementations can assume the
/// participant's slot is still empty.
pub trait ScoringRule: Send + Sync {
    /// The variant this rule implements
    fn variant(&self) -> GameVariant;

    /// Whether `payload` is a legal answer for the current question
    fn accepts(&self, state: &GameState, payload: &AnswerPayload) -> bool;

    /// Record the answer and apply this rule's scoring
    fn apply_answer(
        &self,
        state: GameState,
        participant: ParticipantId,
        payload: AnswerPayload,
    ) -> GameState;
}

/// Each participant reports whether they answered correctly; a correct
/// answer scores one point for that participant immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfJudgedRule;

impl ScoringRule for SelfJudgedRule {
    fn variant(&self) -> GameVariant {
        GameVariant::SelfJudged
    }

    fn accepts(&self, _state: &GameState, payload: &AnswerPayload) -> bool {
        matches!(payload, AnswerPayload::Judged(_))
    }

    fn apply_answer(
        &self,
        mut state: GameState,
        participant: ParticipantId,
        payload: AnswerPayload,
    ) -> GameState {
        let correct = payload.is_correct();
        if state.round_mut().record(participant, payload) && correct {
            state.participants_mut().get_mut(participant).award_point();
        }
        state
    }
}

/// Each participant picks one of two choices; when both picks agree, both
/// participants score one point.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingRule;

impl ScoringRule for MatchingRule {
    fn variant(&self) -> GameVariant {
        GameVariant::Matching
    }

    fn accepts(&self, state: &GameState, payload: &AnswerPayload) -> bool {
        match payload {
            AnswerPayload::Choice(option) => state
                .current_choices()
                .iter()
                .any(|choice| choice == option),
            AnswerPayload::Judged(_) => false,
        }
    }

    fn apply_answer(
        &self,
        mut state: GameState,
        participant: ParticipantId,
        payload: AnswerPayload,
    ) -> GameState {
        if state.round_mut().record(participant, payload) && state.round().is_agreed() {
            for id in ParticipantId::ALL {
                state.participants_mut().get_mut(id).award_point();
            }
        }
        state
    }
}

/// Game variant: selects the scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameVariant {
    /// Self-judged correctness (thumbs up / thumbs down)
    #[default]
    SelfJudged,
    /// Both participants pick a name; agreement scores for both
    Matching,
}

static SELF_JUDGED: SelfJudgedRule = SelfJudgedRule;
static MATCHING: MatchingRule = MatchingRule;

impl GameVariant {
    /// Valid names accepted by [`FromStr`]
    pub const NAMES: [&'static str; 2] = ["self-judged", "matching"];

    /// The scoring strategy for this variant
    pub fn rule(self) -> &'static dyn ScoringRule {
        match self {
            GameVariant::SelfJudged => &SELF_JUDGED,
            GameVariant::Matching => &MATCHING,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::SelfJudged => "self-judged",
            GameVariant::Matching => "matching",
        }
    }

    /// Get a human-readable description of this variant
    pub fn description(&self) -> &'static str {
        match self {
            GameVariant::SelfJudged => "Self-judged: each partner marks their own answer right or wrong",
            GameVariant::Matching => "Matching: both partners pick a name, agreement scores for both",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "self-judged" | "self_judged" | "judged" => Ok(GameVariant::SelfJudged),
            "matching" | "match" => Ok(GameVariant::Matching),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}
