//! UI event types emitted by GameController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The engine's reaction to user input is only ever
//! observed through these events.

use quiz_domain::GameState;

/// Events emitted by GameController for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The game state changed; re-render from this snapshot
    StateChanged(GameState),
    /// Setup form rejected; show the message inline
    SetupRejected { message: String },
    /// Question list loaded
    QuestionsLoaded { count: usize },
    /// Question list could not be loaded; the game continues with none
    QuestionsUnavailable { reason: String },
    /// Controller shut down
    Exit,
}
