//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ question load (JoinSet)
//!   ├─ ui_rx (UiEvent from controller)    ├─ timer_rx (AdvanceRound)
//!   └─ tick_interval                      └─ cmd_rx.recv() → dispatch
//!        └── cmd_tx ──────────────────>──┘
//! ```

use super::app_controller::controller_task;
use super::event::TuiCommand;
use super::mode::{self, KeyAction};
use super::presenter::TuiPresenter;
use super::state::TuiState;
use super::widgets::{
    MainLayout, game::GameWidget, header::HeaderWidget, results::ResultsWidget,
    setup::SetupWidget, status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quiz_application::{GameConfig, GameController, QuestionSource, UiEvent};
use quiz_domain::Screen;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    // -- Presenter (applies UiEvents to state) --
    presenter: TuiPresenter,

    config: TuiConfig,

    // -- Controller task handle --
    controller_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller.
    ///
    /// Must be called from within a tokio runtime; the controller task
    /// starts loading questions immediately.
    pub fn new(
        game_config: &GameConfig,
        source: Arc<dyn QuestionSource>,
        config: TuiConfig,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let (controller, timer_rx) = GameController::new(game_config, ui_tx);
        let controller_handle =
            tokio::spawn(controller_task(controller, timer_rx, cmd_rx, source));

        Self {
            cmd_tx,
            ui_rx,
            presenter: TuiPresenter::new(),
            config,
            controller_handle,
        }
    }

    /// Run the TUI main loop
    pub async fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!("TUI started");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Let the controller cancel its pending transition
        let _ = self.cmd_tx.send(TuiCommand::Quit);
        let _ = self.controller_handle.await;
        info!("TUI stopped");

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick_rate);

        loop {
            // Render
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                return Ok(());
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(self.config.flash_duration);
                }
            }
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        if let crossterm::event::Event::Key(key) = event {
            let action = mode::handle_key_event(state.screen(), key);
            self.handle_action(state, action);
        }
        // Resize: terminal auto-resizes on next draw
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,

            // Setup form
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::SwitchField => state.switch_focus(),
            KeyAction::SubmitNames => {
                let (first, second) = state.submitted_names();
                self.send(TuiCommand::StartGame { first, second });
            }

            // Playing
            KeyAction::Answer { participant, key } => {
                if state.game.can_answer(participant) {
                    let payload = key.payload(&state.game);
                    self.send(TuiCommand::Answer {
                        participant,
                        payload,
                    });
                } else {
                    debug!("Ignoring answer key for {}", participant);
                }
            }

            // Results
            KeyAction::PlayAgain => {
                if state.screen() == Screen::Results {
                    self.send(TuiCommand::PlayAgain);
                }
            }
        }
    }

    fn send(&self, command: TuiCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

/// Render all widgets
pub(super) fn render(frame: &mut Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    match state.screen() {
        Screen::Setup => frame.render_widget(SetupWidget::new(state), layout.body),
        Screen::Playing => frame.render_widget(GameWidget::new(state), layout.body),
        Screen::Results => frame.render_widget(ResultsWidget::new(state), layout.body),
    }
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::{buffer_lines, contains};
    use quiz_domain::{GameEvent, GameState, GameVariant};
    use ratatui::backend::TestBackend;

    fn draw(state: &TuiState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_render_setup_screen() {
        let lines = draw(&TuiState::new());
        assert!(contains(&lines, "Couple Quiz"));
        assert!(contains(&lines, "Partner 1"));
        assert!(contains(&lines, "SETUP"));
    }

    #[test]
    fn test_render_playing_screen() {
        let mut state = TuiState::new();
        state.game = GameState::with_questions(
            GameVariant::SelfJudged,
            vec!["What is my favourite film?".into()],
        )
        .apply(GameEvent::StartGame {
            first: "Alice".into(),
            second: "Bob".into(),
        })
        .state;
        let lines = draw(&state);
        assert!(contains(&lines, "Question 1 of 1"));
        assert!(contains(&lines, "What is my favourite film?"));
        assert!(contains(&lines, "PLAYING"));
    }
}
