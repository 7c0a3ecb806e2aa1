//! Setup screen: two name fields and the inline error line

use super::MainLayout;
use crate::tui::state::TuiState;
use quiz_domain::ParticipantId;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct SetupWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SetupWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn render_field(&self, participant: ParticipantId, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == participant;
        let border_style = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::raw(self.state.name(participant))];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Partner {} ", participant.number()))
            .border_style(border_style);

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}

impl<'a> Widget for SetupWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = MainLayout::centered_column(area, 60);
        let [intro, first, second, error, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Enter your names to begin",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.state.game.variant().description(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(intro, buf);

        self.render_field(ParticipantId::First, first, buf);
        self.render_field(ParticipantId::Second, second, buf);

        if let Some(message) = &self.state.setup_error {
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))
            .render(error, buf);
        }
    }
}
