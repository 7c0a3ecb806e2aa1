//! Background controller task (Actor pattern)
//!
//! Owns the GameController, the question load and the transition timer
//! channel, and processes commands from the TUI event loop.

use super::event::TuiCommand;
use quiz_application::{GameController, LoadQuestionsOutput, LoadQuestionsUseCase, QuestionSource};
use quiz_domain::GameEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Background controller task (Actor)
///
/// Runs until a `Quit` command arrives or the TUI drops its sender.
pub(super) async fn controller_task(
    mut controller: GameController,
    mut timer_rx: mpsc::UnboundedReceiver<GameEvent>,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    source: Arc<dyn QuestionSource>,
) {
    controller.publish();

    // One-time question load
    let mut tasks = tokio::task::JoinSet::new();
    tasks.spawn(async move { LoadQuestionsUseCase::new(source).execute().await });

    loop {
        tokio::select! {
            biased;

            Some(res) = tasks.join_next() => {
                match res {
                    Ok(output) => controller.questions_loaded(output),
                    Err(e) => {
                        warn!("Question load task failed: {}", e);
                        controller.questions_loaded(LoadQuestionsOutput {
                            questions: Vec::new(),
                            failure: Some(e.to_string()),
                        });
                    }
                }
            }

            // Scheduled transitions
            Some(event) = timer_rx.recv() => {
                controller.dispatch(event);
            }

            // Handle commands
            cmd_opt = cmd_rx.recv() => {
                let cmd = match cmd_opt {
                    Some(c) => c,
                    None => break, // Channel closed
                };

                match cmd {
                    TuiCommand::StartGame { first, second } => {
                        controller.dispatch(GameEvent::StartGame { first, second });
                    }
                    TuiCommand::Answer { participant, payload } => {
                        controller.dispatch(GameEvent::Answer { participant, payload });
                    }
                    TuiCommand::PlayAgain => {
                        controller.dispatch(GameEvent::PlayAgain);
                    }
                    TuiCommand::Quit => {
                        break;
                    }
                }
            }
        }
    }

    debug!("Controller task stopping");
    controller.shutdown();
}
