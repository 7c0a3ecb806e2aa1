//! Game state

use crate::core::question::Question;
use crate::participant::{ParticipantId, Participants};
use crate::round::{GameVariant, RoundAnswer};
use std::sync::Arc;

use super::outcome::Outcome;

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Setup,
    Playing,
    Results,
}

/// Complete game state: the single source of truth owned by the controller.
///
/// Values are replaced wholesale by [`GameState::apply`]; the question list
/// is shared behind an `Arc` so cloning a state stays cheap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    pub(crate) screen: Screen,
    pub(crate) variant: GameVariant,
    pub(crate) questions: Arc<[Question]>,
    /// Set once the question load has resolved (successfully or not)
    pub(crate) loaded: bool,
    pub(crate) current_question_index: usize,
    pub(crate) participants: Participants,
    pub(crate) round: RoundAnswer,
    pub(crate) transitioning: bool,
    /// Bumped whenever a scheduled transition must be invalidated or issued
    pub(crate) generation: u64,
}

impl GameState {
    /// Initial state for the given variant, with no questions loaded
    pub fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Initial state with an already loaded question list
    pub fn with_questions(variant: GameVariant, questions: Vec<Question>) -> Self {
        Self {
            variant,
            questions: questions.into(),
            loaded: true,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the question list has arrived; games cannot start before that
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// 1-based question number for display ("Question 1 of 0" when empty)
    pub fn question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    /// True when the current question is the last one (or there are none)
    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn round(&self) -> &RoundAnswer {
        &self.round
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the participant can still answer the current question
    pub fn can_answer(&self, participant: ParticipantId) -> bool {
        self.screen == Screen::Playing
            && !self.transitioning
            && !self.round.has_answered(participant)
    }

    /// The two choices for the current question in matching mode
    pub fn current_choices(&self) -> [String; 2] {
        let [first, second] = match self.current_question() {
            Some(question) => question.choices(&self.participants),
            None => self.participants.names(),
        };
        [first.to_string(), second.to_string()]
    }

    /// Share of questions scored by a participant
    pub fn progress(&self, participant: ParticipantId) -> f64 {
        self.participants
            .get(participant)
            .progress(self.total_questions())
    }

    /// Outcome from the current scores
    pub fn outcome(&self) -> Outcome {
        Outcome::determine(&self.participants)
    }

    pub(crate) fn round_mut(&mut self) -> &mut RoundAnswer {
        &mut self.round
    }

    pub(crate) fn participants_mut(&mut self) -> &mut Participants {
        &mut self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(GameVariant::SelfJudged);
        assert_eq!(state.screen(), Screen::Setup);
        assert_eq!(state.current_question_index(), 0);
        assert_eq!(state.total_questions(), 0);
        assert_eq!(state.question_number(), 1);
        assert!(!state.is_transitioning());
        assert!(!state.is_loaded());
        assert!(state.current_question().is_none());
        assert!(state.is_last_question());
    }

    #[test]
    fn test_current_choices_without_questions_uses_names() {
        let mut state = GameState::new(GameVariant::Matching);
        state.participants = Participants::new("Alice", "Bob");
        assert_eq!(
            state.current_choices(),
            ["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn test_can_answer_only_while_playing() {
        let mut state = GameState::with_questions(
            GameVariant::SelfJudged,
            vec![Question::new("Q1")],
        );
        assert!(!state.can_answer(ParticipantId::First));
        state.screen = Screen::Playing;
        assert!(state.can_answer(ParticipantId::First));
        state.transitioning = true;
        assert!(!state.can_answer(ParticipantId::First));
    }
}
