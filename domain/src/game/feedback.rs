//! Feedback line shown under the current question

use super::state::GameState;
use crate::participant::ParticipantId;
use crate::round::{GameVariant, RoundStatus};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nobody has answered yet
    AwaitingBoth,
    /// One answer is in; holds the name of the participant still to answer
    WaitingFor(String),
    /// Self-judged round complete
    Advancing,
    /// Matching round complete with the same pick
    Matched,
    /// Matching round complete with different picks
    Mismatched,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::AwaitingBoth => write!(f, "Both players, please answer!"),
            Feedback::WaitingFor(name) => write!(f, "Waiting for {}...", name),
            Feedback::Advancing => write!(f, "Great! Moving to the next question..."),
            Feedback::Matched => write!(f, "It's a match!"),
            Feedback::Mismatched => write!(f, "No match this time."),
        }
    }
}

impl GameState {
    /// Feedback for the round in progress
    pub fn feedback(&self) -> Feedback {
        let waiting_for = |id: ParticipantId| {
            Feedback::WaitingFor(self.participants().get(id).name().to_string())
        };
        match self.round().status() {
            RoundStatus::AwaitingBoth => Feedback::AwaitingBoth,
            RoundStatus::AwaitingFirst => waiting_for(ParticipantId::First),
            RoundStatus::AwaitingSecond => waiting_for(ParticipantId::Second),
            RoundStatus::Complete => match self.variant() {
                GameVariant::SelfJudged => Feedback::Advancing,
                GameVariant::Matching if self.round().is_agreed() => Feedback::Matched,
                GameVariant::Matching => Feedback::Mismatched,
            },
        }
    }
}
