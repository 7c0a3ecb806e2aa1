//! TUI (Text User Interface) module for couple-quiz
//!
//! Terminal rendition of the three game screens (setup, playing,
//! results) using ratatui, driven by a background controller task.

mod app;
mod app_controller;
mod event;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiCommand;
pub use mode::{AnswerKey, KeyAction, handle_key_event};
pub use presenter::TuiPresenter;
pub use state::TuiState;
