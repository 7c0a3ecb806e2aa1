//! Final result of a game

use crate::participant::{ParticipantId, Participants};
use serde::{Deserialize, Serialize};

/// Who won, decided purely by the two final scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    /// Equal scores, including equal non-zero scores
    Tie,
}

impl Outcome {
    pub fn determine(participants: &Participants) -> Self {
        let (first, second) = participants.scores();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::FirstWins,
            std::cmp::Ordering::Less => Outcome::SecondWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// The winning participant, if any
    pub fn winner(&self) -> Option<ParticipantId> {
        match self {
            Outcome::FirstWins => Some(ParticipantId::First),
            Outcome::SecondWins => Some(ParticipantId::Second),
            Outcome::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }

    /// Results screen headline
    pub fn announcement(&self, participants: &Participants) -> String {
        match self.winner() {
            Some(id) => format!("{} is the winner!", participants.get(id).name()),
            None => "It's a tie! You both know each other so well!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(first: u32, second: u32) -> Participants {
        let mut p = Participants::new("Alice", "Bob");
        for _ in 0..first {
            p.get_mut(ParticipantId::First).award_point();
        }
        for _ in 0..second {
            p.get_mut(ParticipantId::Second).award_point();
        }
        p
    }

    #[test]
    fn test_first_wins() {
        assert_eq!(Outcome::determine(&scored(3, 1)), Outcome::FirstWins);
        assert_eq!(Outcome::FirstWins.winner(), Some(ParticipantId::First));
    }

    #[test]
    fn test_second_wins() {
        assert_eq!(Outcome::determine(&scored(0, 2)), Outcome::SecondWins);
    }

    #[test]
    fn test_zero_zero_is_tie() {
        assert_eq!(Outcome::determine(&scored(0, 0)), Outcome::Tie);
    }

    #[test]
    fn test_equal_nonzero_is_tie() {
        let outcome = Outcome::determine(&scored(4, 4));
        assert!(outcome.is_tie());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_announcement() {
        let participants = scored(1, 2);
        assert_eq!(
            Outcome::determine(&participants).announcement(&participants),
            "Bob is the winner!"
        );
        assert_eq!(
            Outcome::Tie.announcement(&participants),
            "It's a tie! You both know each other so well!"
        );
    }
}
