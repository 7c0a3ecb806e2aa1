//! Game state and the round resolution engine
//!
//! The engine is a reducer: [`GameState::apply`] consumes the current state
//! and a [`GameEvent`] and returns the next state together with the
//! [`Effect`]s the caller must perform (scheduling the post-round
//! transition, cancelling it, reporting a setup error).
//!
//! ```text
//!   Setup ──StartGame──▶ Playing ──Answer×2──▶ (transitioning)
//!     ▲                    ▲                        │ AdvanceRound{generation}
//!     │                    └──── more questions ◀───┤
//!     └──── PlayAgain ──── Results ◀── last question┘
//! ```

pub mod engine;
pub mod event;
pub mod feedback;
pub mod outcome;
pub mod setup;
pub mod state;

pub use event::{Effect, GameEvent, Reduction};
pub use feedback::Feedback;
pub use outcome::Outcome;
pub use setup::{SetupError, validate_names};
pub use state::{GameState, Screen};
