//! Participants of a game
//!
//! A game always has exactly two participants. The arity is encoded in
//! [`ParticipantId`] so an out-of-range participant cannot be addressed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two participants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantId {
    #[default]
    First,
    Second,
}

impl ParticipantId {
    /// Both participants in display order
    pub const ALL: [ParticipantId; 2] = [ParticipantId::First, ParticipantId::Second];

    /// 1-based participant number
    pub fn number(self) -> u8 {
        match self {
            ParticipantId::First => 1,
            ParticipantId::Second => 2,
        }
    }

    /// The opposite participant
    pub fn other(self) -> Self {
        match self {
            ParticipantId::First => ParticipantId::Second,
            ParticipantId::Second => ParticipantId::First,
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant-{}", self.number())
    }
}

/// A named player with a running score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    score: u32,
}

impl Participant {
    /// Create a participant with a zero score
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Share of `total` questions scored, in `[0.0, 1.0]`
    pub fn progress(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (self.score as f64 / total as f64).min(1.0)
        }
    }

    /// Scores are only ever changed by the round engine.
    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }
}

/// The fixed pair of participants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    first: Participant,
    second: Participant,
}

impl Participants {
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            first: Participant::new(first_name),
            second: Participant::new(second_name),
        }
    }

    pub fn get(&self, id: ParticipantId) -> &Participant {
        match id {
            ParticipantId::First => &self.first,
            ParticipantId::Second => &self.second,
        }
    }

    pub(crate) fn get_mut(&mut self, id: ParticipantId) -> &mut Participant {
        match id {
            ParticipantId::First => &mut self.first,
            ParticipantId::Second => &mut self.second,
        }
    }

    pub fn first(&self) -> &Participant {
        &self.first
    }

    pub fn second(&self) -> &Participant {
        &self.second
    }

    pub fn names(&self) -> [&str; 2] {
        [self.first.name(), self.second.name()]
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.first.score, self.second.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Participant)> {
        ParticipantId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}
