//! Reducer inputs and outputs

use super::outcome::Outcome;
use super::setup::SetupError;
use super::state::GameState;
use crate::core::question::Question;
use crate::participant::ParticipantId;
use crate::round::AnswerPayload;

/// Events fed into [`GameState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The question list finished loading (possibly empty).
    /// Only applied on the setup screen.
    QuestionsLoaded(Vec<Question>),
    /// The setup form was submitted
    StartGame { first: String, second: String },
    /// A participant submitted an answer for the current question
    Answer {
        participant: ParticipantId,
        payload: AnswerPayload,
    },
    /// A scheduled post-round transition fired
    AdvanceRound { generation: u64 },
    /// Return to the setup screen
    PlayAgain,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule `AdvanceRound { generation }` after the transition delay
    ScheduleTransition { generation: u64 },
    /// Drop any outstanding scheduled transition
    CancelTransition,
    /// Show a setup validation error; the state is unchanged
    RejectSetup(SetupError),
    /// An answer was not accepted; the state is unchanged
    AnswerIgnored {
        participant: ParticipantId,
        payload: AnswerPayload,
    },
    /// The last round finished and the results screen is shown
    GameFinished(Outcome),
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub state: GameState,
    pub effects: Vec<Effect>,
}

impl Reduction {
    /// New state without side effects
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// New state with one side effect
    pub fn with_effect(state: GameState, effect: Effect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    pub fn into_parts(self) -> (GameState, Vec<Effect>) {
        (self.state, self.effects)
    }
}
