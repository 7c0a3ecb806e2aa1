//! Status bar widget: key hints + flash messages

use crate::tui::state::TuiState;
use quiz_domain::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let screen = self.state.screen();
        let (label, color) = match screen {
            Screen::Setup => ("SETUP", Color::Blue),
            Screen::Playing => ("PLAYING", Color::Green),
            Screen::Results => ("RESULTS", Color::Magenta),
        };
        let label_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let label_line = Line::from(Span::styled(format!(" {} ", label), label_style));
        let label_width = label.len() as u16 + 2;
        buf.set_line(area.x, area.y, &label_line, label_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => match screen {
                Screen::Setup => "Tab:switch field  Enter:start  Ctrl+C:quit".to_string(),
                Screen::Playing => "a/s:partner 1  k/l:partner 2  Esc:quit".to_string(),
                Screen::Results => "Enter/r:play again  Esc:quit".to_string(),
            },
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + label_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::{contains, render_lines};

    #[test]
    fn test_setup_hints() {
        let state = TuiState::new();
        let lines = render_lines(StatusBarWidget::new(&state), 80, 1);
        assert!(contains(&lines, "SETUP"));
        assert!(contains(&lines, "Enter:start"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("Could not load questions");
        let lines = render_lines(StatusBarWidget::new(&state), 80, 1);
        assert!(contains(&lines, "Could not load questions"));
        assert!(!contains(&lines, "Enter:start"));
    }
}
