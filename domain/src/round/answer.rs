//! Per-question answer slots

use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// What a participant submitted for the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerPayload {
    /// Self-reported correctness
    Judged(bool),
    /// The chosen option (a participant name unless the question overrides it)
    Choice(String),
}

impl AnswerPayload {
    pub fn correct() -> Self {
        Self::Judged(true)
    }

    pub fn incorrect() -> Self {
        Self::Judged(false)
    }

    pub fn choice(option: impl Into<String>) -> Self {
        Self::Choice(option.into())
    }

    /// True only for `Judged(true)`
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerPayload::Judged(true))
    }
}

/// Progress of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Nobody has answered yet
    AwaitingBoth,
    /// Only the second participant has answered
    AwaitingFirst,
    /// Only the first participant has answered
    AwaitingSecond,
    /// Both slots are set
    Complete,
}

/// Both participants' answers for the current question.
///
/// A slot, once set, stays set until the round is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAnswer {
    first: Option<AnswerPayload>,
    second: Option<AnswerPayload>,
}

impl RoundAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, participant: ParticipantId) -> Option<&AnswerPayload> {
        match participant {
            ParticipantId::First => self.first.as_ref(),
            ParticipantId::Second => self.second.as_ref(),
        }
    }

    pub fn has_answered(&self, participant: ParticipantId) -> bool {
        self.slot(participant).is_some()
    }

    /// Set a slot. Returns false, leaving the slot untouched, when it was
    /// already set.
    pub(crate) fn record(&mut self, participant: ParticipantId, payload: AnswerPayload) -> bool {
        let slot = match participant {
            ParticipantId::First => &mut self.first,
            ParticipantId::Second => &mut self.second,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(payload);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// Both slots are set and hold the same answer
    pub fn is_agreed(&self) -> bool {
        matches!((&self.first, &self.second), (Some(a), Some(b)) if a == b)
    }

    pub fn status(&self) -> RoundStatus {
        match (self.first.is_some(), self.second.is_some()) {
            (false, false) => RoundStatus::AwaitingBoth,
            (true, false) => RoundStatus::AwaitingSecond,
            (false, true) => RoundStatus::AwaitingFirst,
            (true, true) => RoundStatus::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_write_once() {
        let mut round = RoundAnswer::new();
        assert!(round.record(ParticipantId::First, AnswerPayload::correct()));
        assert!(!round.record(ParticipantId::First, AnswerPayload::incorrect()));
        assert_eq!(
            round.slot(ParticipantId::First),
            Some(&AnswerPayload::correct())
        );
    }

    #[test]
    fn test_status_progression() {
        let mut round = RoundAnswer::new();
        assert_eq!(round.status(), RoundStatus::AwaitingBoth);
        round.record(ParticipantId::Second, AnswerPayload::incorrect());
        assert_eq!(round.status(), RoundStatus::AwaitingFirst);
        round.record(ParticipantId::First, AnswerPayload::incorrect());
        assert_eq!(round.status(), RoundStatus::Complete);
        assert!(round.is_complete());
    }

    #[test]
    fn test_is_agreed_requires_both_slots() {
        let mut round = RoundAnswer::new();
        round.record(ParticipantId::First, AnswerPayload::choice("Alice"));
        assert!(!round.is_agreed());
        round.record(ParticipantId::Second, AnswerPayload::choice("Alice"));
        assert!(round.is_agreed());
    }

    #[test]
    fn test_different_choices_disagree() {
        let mut round = RoundAnswer::new();
        round.record(ParticipantId::First, AnswerPayload::choice("Alice"));
        round.record(ParticipantId::Second, AnswerPayload::choice("Bob"));
        assert!(round.is_complete());
        assert!(!round.is_agreed());
    }
}
