//! Header widget: shows the variant and where the game is

use crate::tui::state::TuiState;
use quiz_domain::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.state.game;
        let phase_text = match game.screen() {
            Screen::Setup => "Setup".to_string(),
            Screen::Playing => format!(
                "Question {} of {}",
                game.question_number(),
                game.total_questions()
            ),
            Screen::Results => "Results".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("♥ ", Style::default().fg(Color::Red)),
            Span::styled(
                game.variant().as_str(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(phase_text, Style::default().fg(Color::Yellow)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Couple Quiz ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
