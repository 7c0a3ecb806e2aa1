//! Results screen: winner line and final scores

use super::MainLayout;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ResultsWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.state.game;
        let participants = game.participants();

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                game.outcome().announcement(participants),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (_, participant) in participants.iter() {
            lines.push(Line::from(format!(
                "{}: {} / {}",
                participant.name(),
                participant.score(),
                game.total_questions()
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter or r to play again",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Results "))
            .alignment(Alignment::Center)
            .render(MainLayout::centered_column(area, 60), buf);
    }
}
