//! TUI Presenter - Converts Application Events to TUI State
//!
//! ```text
//! GameController (UiEvent)
//!         ↓
//!   TuiPresenter (this module)
//!         ↓
//!   TuiState (view state)
//!         ↓
//!   Rendering (widgets)
//! ```

use super::state::TuiState;
use quiz_application::UiEvent;
use quiz_domain::Screen;

/// Applies [`UiEvent`]s to the TUI state
#[derive(Debug, Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::StateChanged(game) => {
                let previous = state.screen();
                state.game = game.clone();
                match (previous, game.screen()) {
                    (Screen::Setup, Screen::Setup) => {}
                    (_, Screen::Setup) => state.clear_setup(),
                    (Screen::Setup, _) => state.setup_error = None,
                    _ => {}
                }
            }
            UiEvent::SetupRejected { message } => {
                state.setup_error = Some(message.clone());
            }
            UiEvent::QuestionsLoaded { count } => {
                state.set_flash(format!("Loaded {} questions", count));
            }
            UiEvent::QuestionsUnavailable { reason } => {
                state.set_flash(format!("Could not load questions: {}", reason));
            }
            UiEvent::Exit => state.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{GameEvent, GameState, GameVariant};

    fn started() -> GameState {
        GameState::with_questions(GameVariant::SelfJudged, vec!["Q1".into()])
            .apply(GameEvent::StartGame {
                first: "Alice".into(),
                second: "Bob".into(),
            })
            .state
    }

    #[test]
    fn test_setup_rejected_sets_error() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(
            &mut state,
            &UiEvent::SetupRejected {
                message: "Please enter names for both partners.".into(),
            },
        );
        assert_eq!(
            state.setup_error.as_deref(),
            Some("Please enter names for both partners.")
        );
    }

    #[test]
    fn test_leaving_setup_clears_error() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        state.setup_error = Some("old".into());
        presenter.apply(&mut state, &UiEvent::StateChanged(started()));
        assert_eq!(state.screen(), Screen::Playing);
        assert!(state.setup_error.is_none());
    }

    #[test]
    fn test_returning_to_setup_clears_form() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        state.names = ["Alice".into(), "Bob".into()];
        presenter.apply(&mut state, &UiEvent::StateChanged(started()));
        assert_eq!(state.names[0], "Alice");

        let restarted = started().apply(GameEvent::PlayAgain).state;
        presenter.apply(&mut state, &UiEvent::StateChanged(restarted));
        assert_eq!(state.screen(), Screen::Setup);
        assert!(state.names.iter().all(String::is_empty));
    }

    #[test]
    fn test_question_load_failure_flashes() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(
            &mut state,
            &UiEvent::QuestionsUnavailable {
                reason: "Failed to read questions.json: not found".into(),
            },
        );
        let (flash, _) = state.flash_message.as_ref().unwrap();
        assert!(flash.starts_with("Could not load questions"));
    }

    #[test]
    fn test_exit_quits() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(&mut state, &UiEvent::Exit);
        assert!(state.should_quit);
    }
}
