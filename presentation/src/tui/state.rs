//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! The game itself is a snapshot of the controller's [`GameState`],
//! replaced by [`TuiPresenter`](super::presenter::TuiPresenter) on
//! every `UiEvent::StateChanged`; the setup form lives only here.

use quiz_domain::{GameState, ParticipantId, Screen};
use std::time::{Duration, Instant};

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    // -- Game snapshot --
    pub game: GameState,

    // -- Setup form --
    pub names: [String; 2],
    pub focus: ParticipantId,
    pub setup_error: Option<String>,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.game.screen()
    }

    pub fn name(&self, participant: ParticipantId) -> &str {
        &self.names[slot(participant)]
    }

    pub fn insert_char(&mut self, c: char) {
        self.names[slot(self.focus)].push(c);
    }

    pub fn delete_char(&mut self) {
        self.names[slot(self.focus)].pop();
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Names as typed, for the StartGame command
    pub fn submitted_names(&self) -> (String, String) {
        (self.names[0].clone(), self.names[1].clone())
    }

    /// Reset the form for a new game
    pub fn clear_setup(&mut self) {
        self.names = Default::default();
        self.focus = ParticipantId::First;
        self.setup_error = None;
    }

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }
}

fn slot(participant: ParticipantId) -> usize {
    usize::from(participant.number() - 1)
}
