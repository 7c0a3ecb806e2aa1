//! Game controller: owns the game state and performs reducer effects.
//!
//! ```text
//!  dispatch(GameEvent) ──▶ GameState::apply ──▶ Reduction { state, effects }
//!                                                   │
//!        ScheduleTransition ── tokio::spawn(sleep(delay)) ──▶ timer channel
//!        CancelTransition   ── CancellationToken::cancel()
//!        RejectSetup        ── UiEvent::SetupRejected
//!        AnswerIgnored      ── debug log
//! ```
//!
//! Scheduled transitions arrive back on the timer channel returned by
//! [`GameController::new`] and must be fed into [`GameController::dispatch`]
//! by the owner's event loop. A transition that fires after a restart
//! carries an old generation and is ignored by the engine.

use crate::config::GameConfig;
use crate::ports::ui_event::UiEvent;
use crate::use_cases::load_questions::LoadQuestionsOutput;
use quiz_domain::{Effect, GameEvent, GameState};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Owns the authoritative [`GameState`].
pub struct GameController {
    state: GameState,
    transition_delay: Duration,
    pending: Option<CancellationToken>,
    timer_tx: mpsc::UnboundedSender<GameEvent>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl GameController {
    /// Create a controller and the receiver its scheduled transitions are
    /// delivered on.
    pub fn new(
        config: &GameConfig,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let controller = Self {
            state: GameState::new(config.variant),
            transition_delay: config.transition_delay,
            pending: None,
            timer_tx,
            ui_tx,
        };
        (controller, timer_rx)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether a post-round transition is scheduled and not yet applied
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Publish the current state (used once at startup)
    pub fn publish(&self) {
        let _ = self.ui_tx.send(UiEvent::StateChanged(self.state.clone()));
    }

    /// Apply an event, perform its effects and publish the new state.
    pub fn dispatch(&mut self, event: GameEvent) {
        debug!("Dispatching {:?}", event);

        let state = std::mem::take(&mut self.state);
        let (state, effects) = state.apply(event).into_parts();
        self.state = state;

        for effect in effects {
            self.perform(effect);
        }

        if !self.state.is_transitioning()
            && let Some(token) = self.pending.take()
        {
            token.cancel();
        }

        self.publish();
    }

    /// Feed the result of a question load into the game
    pub fn questions_loaded(&mut self, output: LoadQuestionsOutput) {
        let event = match &output.failure {
            Some(reason) => UiEvent::QuestionsUnavailable {
                reason: reason.clone(),
            },
            None => UiEvent::QuestionsLoaded {
                count: output.questions.len(),
            },
        };
        let _ = self.ui_tx.send(event);
        self.dispatch(GameEvent::QuestionsLoaded(output.questions));
    }

    /// Cancel outstanding work and notify the presentation layer.
    pub fn shutdown(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        let _ = self.ui_tx.send(UiEvent::Exit);
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleTransition { generation } => self.schedule_transition(generation),
            Effect::CancelTransition => {
                if let Some(token) = self.pending.take() {
                    debug!("Cancelling pending transition");
                    token.cancel();
                }
            }
            Effect::RejectSetup(error) => {
                debug!("Setup rejected: {}", error);
                let _ = self.ui_tx.send(UiEvent::SetupRejected {
                    message: error.to_string(),
                });
            }
            Effect::AnswerIgnored {
                participant,
                payload,
            } => {
                debug!("Ignoring answer {:?} from {}", payload, participant);
            }
            Effect::GameFinished(outcome) => {
                let (first, second) = self.state.participants().scores();
                info!("Game finished: {:?} ({} - {})", outcome, first, second);
            }
        }
    }

    fn schedule_transition(&mut self, generation: u64) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.timer_tx.clone();
        let delay = self.transition_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(GameEvent::AdvanceRound { generation });
                }
            }
        });

        debug!("Scheduled transition for generation {}", generation);
        self.pending = Some(token);
    }
}
