//! Commands sent from the TUI event loop to the controller task

use quiz_domain::{AnswerPayload, ParticipantId};

/// Command from the TUI loop to the controller task (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// Submit the setup form
    StartGame { first: String, second: String },
    /// A participant answered the current question
    Answer {
        participant: ParticipantId,
        payload: AnswerPayload,
    },
    /// Return from the results screen to setup
    PlayAgain,
    /// Stop the controller
    Quit,
}
