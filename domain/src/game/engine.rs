//! Round resolution engine
//!
//! Every transition is a total function of `(GameState, GameEvent)`.
//! Events that are not valid in the current state (a second answer from the
//! same participant, an answer during the transition window, a stale timer)
//! return the state unchanged. Ignored answers are reported as
//! [`Effect::AnswerIgnored`]; everything else produces no effects.

use super::event::{Effect, GameEvent, Reduction};
use super::outcome::Outcome;
use super::setup::{SetupError, validate_names};
use super::state::{GameState, Screen};
use crate::core::question::Question;
use crate::participant::{ParticipantId, Participants};
use crate::round::{AnswerPayload, RoundAnswer};

impl GameState {
    /// Apply one event, returning the next state and requested effects.
    pub fn apply(self, event: GameEvent) -> Reduction {
        match event {
            GameEvent::QuestionsLoaded(questions) => self.load_questions(questions),
            GameEvent::StartGame { first, second } => self.start_game(&first, &second),
            GameEvent::Answer {
                participant,
                payload,
            } => self.submit_answer(participant, payload),
            GameEvent::AdvanceRound { generation } => self.advance_round(generation),
            GameEvent::PlayAgain => self.restart(),
        }
    }

    fn load_questions(mut self, questions: Vec<Question>) -> Reduction {
        if self.screen != Screen::Setup {
            return Reduction::new(self);
        }
        self.questions = questions.into();
        self.loaded = true;
        Reduction::new(self)
    }

    fn start_game(mut self, first: &str, second: &str) -> Reduction {
        if self.screen != Screen::Setup {
            return Reduction::new(self);
        }
        if !self.loaded {
            return Reduction::with_effect(self, Effect::RejectSetup(SetupError::QuestionsLoading));
        }
        let (first, second) = match validate_names(first, second) {
            Ok(names) => names,
            Err(error) => return Reduction::with_effect(self, Effect::RejectSetup(error)),
        };

        self.participants = Participants::new(first, second);
        self.screen = Screen::Playing;
        self.current_question_index = 0;
        self.round = RoundAnswer::default();
        self.transitioning = false;
        self.generation += 1;
        Reduction::new(self)
    }

    fn submit_answer(self, participant: ParticipantId, payload: AnswerPayload) -> Reduction {
        let rule = self.variant.rule();
        if !self.can_answer(participant) || !rule.accepts(&self, &payload) {
            return Reduction::with_effect(
                self,
                Effect::AnswerIgnored {
                    participant,
                    payload,
                },
            );
        }

        let mut state = rule.apply_answer(self, participant, payload);
        if !state.round.is_complete() {
            return Reduction::new(state);
        }

        state.transitioning = true;
        state.generation += 1;
        let generation = state.generation;
        Reduction::with_effect(state, Effect::ScheduleTransition { generation })
    }

    fn advance_round(mut self, generation: u64) -> Reduction {
        if self.screen != Screen::Playing || !self.transitioning || generation != self.generation
        {
            return Reduction::new(self);
        }

        self.transitioning = false;
        if !self.is_last_question() {
            self.current_question_index += 1;
            self.round = RoundAnswer::default();
            return Reduction::new(self);
        }

        self.screen = Screen::Results;
        let outcome = Outcome::determine(&self.participants);
        Reduction::with_effect(self, Effect::GameFinished(outcome))
    }

    fn restart(self) -> Reduction {
        let state = GameState {
            variant: self.variant,
            questions: self.questions,
            loaded: self.loaded,
            generation: self.generation + 1,
            ..GameState::default()
        };
        Reduction::with_effect(state, Effect::CancelTransition)
    }
}
