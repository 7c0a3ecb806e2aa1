//! TUI widgets: ratatui components for the three screens
//!
//! Layout:
//! ┌── Header (3) ─────────────────────────────┐
//! ├── Body (flex): setup / game / results ────┤
//! └── StatusBar (1) ──────────────────────────┘

pub mod game;
pub mod header;
pub mod results;
pub mod setup;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// A horizontally centered column of at most `max_width` cells
    pub fn centered_column(area: Rect, max_width: u16) -> Rect {
        let [column] = Layout::horizontal([Constraint::Max(max_width)])
            .flex(Flex::Center)
            .areas(area);
        column
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, widgets::Widget};

    /// Render a widget into a fresh test terminal and return its text rows
    pub fn render_lines(widget: impl Widget, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn test_centered_column() {
        let column = MainLayout::centered_column(Rect::new(0, 0, 100, 10), 60);
        assert_eq!(column.width, 60);
        assert_eq!(column.x, 20);
    }
}
