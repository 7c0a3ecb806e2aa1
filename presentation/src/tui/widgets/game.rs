//! Game screen: progress gauges, question card, answer controls, feedback

use crate::tui::mode::AnswerKey;
use crate::tui::state::TuiState;
use quiz_domain::{GameState, ParticipantId};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

fn participant_color(participant: ParticipantId) -> Color {
    match participant {
        ParticipantId::First => Color::LightRed,
        ParticipantId::Second => Color::LightBlue,
    }
}

pub struct GameWidget<'a> {
    state: &'a TuiState,
}

impl<'a> GameWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn game(&self) -> &GameState {
        &self.state.game
    }

    fn render_gauge(&self, participant: ParticipantId, area: Rect, buf: &mut Buffer) {
        let game = self.game();
        let ratio = game.progress(participant).clamp(0.0, 1.0);
        let name = game.participants().get(participant).name();

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", name)))
            .gauge_style(Style::default().fg(participant_color(participant)))
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0))
            .render(area, buf);
    }

    fn render_question(&self, area: Rect, buf: &mut Buffer) {
        let text = match self.game().current_question() {
            Some(question) => Span::styled(
                question.text(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "No questions available.",
                Style::default().fg(Color::DarkGray),
            ),
        };

        Paragraph::new(Line::from(text))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_controls(&self, participant: ParticipantId, area: Rect, buf: &mut Buffer) {
        let game = self.game();
        let enabled = game.can_answer(participant);
        let answered = game.round().has_answered(participant);

        let key_style = if enabled {
            Style::default()
                .fg(participant_color(participant))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines: Vec<Line> = AnswerKey::ALL
            .into_iter()
            .map(|key| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", key.key(participant)), key_style),
                    Span::styled(key.label(game), label_style),
                ])
            })
            .collect();
        if answered {
            lines.push(Line::from(Span::styled(
                "✓ answered",
                Style::default().fg(Color::Green),
            )));
        }

        let name = game.participants().get(participant).name();
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", name))
                    .border_style(Style::default().fg(participant_color(participant))),
            )
            .render(area, buf);
    }
}

impl<'a> Widget for GameWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [gauges, question, controls, feedback] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .areas(area);

        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let [first_gauge, second_gauge] = halves.areas(gauges);
        self.render_gauge(ParticipantId::First, first_gauge, buf);
        self.render_gauge(ParticipantId::Second, second_gauge, buf);

        self.render_question(question, buf);

        let [first_controls, second_controls] = halves.areas(controls);
        self.render_controls(ParticipantId::First, first_controls, buf);
        self.render_controls(ParticipantId::Second, second_controls, buf);

        Paragraph::new(Span::styled(
            self.game().feedback().to_string(),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center)
        .render(feedback, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::{contains, render_lines};
    use quiz_domain::{AnswerPayload, GameEvent, GameVariant, Question};

    fn state_with(variant: GameVariant, questions: Vec<Question>) -> TuiState {
        let mut state = TuiState::new();
        state.game = GameState::with_questions(variant, questions)
            .apply(GameEvent::StartGame {
                first: "Alice".into(),
                second: "Bob".into(),
            })
            .state;
        state
    }

    #[test]
    fn test_renders_question_and_controls() {
        let state = state_with(
            GameVariant::SelfJudged,
            vec!["Where did we first meet?".into()],
        );
        let lines = render_lines(GameWidget::new(&state), 80, 16);
        assert!(contains(&lines, "Where did we first meet?"));
        assert!(contains(&lines, "[a] Correct"));
        assert!(contains(&lines, "[s] Incorrect"));
        assert!(contains(&lines, "[k] Correct"));
        assert!(contains(&lines, "[l] Incorrect"));
        assert!(contains(&lines, "Both players, please answer!"));
    }

    #[test]
    fn test_answered_participant_marked() {
        let mut state = state_with(GameVariant::SelfJudged, vec!["Q1".into(), "Q2".into()]);
        state.game = state
            .game
            .clone()
            .apply(GameEvent::Answer {
                participant: ParticipantId::First,
                payload: AnswerPayload::correct(),
            })
            .state;
        let lines = render_lines(GameWidget::new(&state), 80, 16);
        assert!(contains(&lines, "✓ answered"));
        assert!(contains(&lines, "Waiting for Bob..."));
    }

    #[test]
    fn test_matching_controls_show_choices() {
        let state = state_with(GameVariant::Matching, vec!["Who is the better cook?".into()]);
        let lines = render_lines(GameWidget::new(&state), 80, 16);
        assert!(contains(&lines, "[a] Alice"));
        assert!(contains(&lines, "[l] Bob"));
    }

    #[test]
    fn test_empty_question_list() {
        let state = state_with(GameVariant::SelfJudged, Vec::new());
        let lines = render_lines(GameWidget::new(&state), 80, 16);
        assert!(contains(&lines, "No questions available."));
    }
}
