//! Key handling per screen
//!
//! - Setup: text entry into the two name fields
//! - Playing: one key pair per participant (`a`/`s` and `k`/`l`)
//! - Results: play again or quit

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quiz_domain::{AnswerPayload, GameState, GameVariant, ParticipantId, Screen};

/// Which of a participant's two answer keys was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    /// "Correct" when self-judged, first choice when matching
    Primary,
    /// "Incorrect" when self-judged, second choice when matching
    Secondary,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 2] = [AnswerKey::Primary, AnswerKey::Secondary];

    /// Key bound to this answer for a participant
    pub fn key(self, participant: ParticipantId) -> char {
        match (participant, self) {
            (ParticipantId::First, AnswerKey::Primary) => 'a',
            (ParticipantId::First, AnswerKey::Secondary) => 's',
            (ParticipantId::Second, AnswerKey::Primary) => 'k',
            (ParticipantId::Second, AnswerKey::Secondary) => 'l',
        }
    }

    /// Button label for the current question
    pub fn label(self, game: &GameState) -> String {
        match game.variant() {
            GameVariant::SelfJudged => match self {
                AnswerKey::Primary => "Correct".to_string(),
                AnswerKey::Secondary => "Incorrect".to_string(),
            },
            GameVariant::Matching => {
                let [first, second] = game.current_choices();
                match self {
                    AnswerKey::Primary => first,
                    AnswerKey::Secondary => second,
                }
            }
        }
    }

    /// Translate the key press into the answer the engine expects
    pub fn payload(self, game: &GameState) -> AnswerPayload {
        match game.variant() {
            GameVariant::SelfJudged => match self {
                AnswerKey::Primary => AnswerPayload::correct(),
                AnswerKey::Secondary => AnswerPayload::incorrect(),
            },
            GameVariant::Matching => AnswerPayload::choice(self.label(game)),
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,

    // Setup form
    InsertChar(char),
    DeleteChar,
    SwitchField,
    SubmitNames,

    // Playing
    Answer {
        participant: ParticipantId,
        key: AnswerKey,
    },

    // Results
    PlayAgain,
}

/// Map a key event to an action for the given screen
pub fn handle_key_event(screen: Screen, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match screen {
        Screen::Setup => handle_setup(key),
        Screen::Playing => handle_playing(key),
        Screen::Results => handle_results(key),
    }
}

fn handle_setup(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::SubmitNames,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => KeyAction::SwitchField,
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::InsertChar(c)
        }
        _ => KeyAction::None,
    }
}

fn handle_playing(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c) => ParticipantId::ALL
            .into_iter()
            .flat_map(|participant| {
                AnswerKey::ALL
                    .into_iter()
                    .map(move |answer| (participant, answer))
            })
            .find(|(participant, answer)| answer.key(*participant) == c.to_ascii_lowercase())
            .map_or(KeyAction::None, |(participant, key)| KeyAction::Answer {
                participant,
                key,
            }),
        _ => KeyAction::None,
    }
}

fn handle_results(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => KeyAction::PlayAgain,
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{GameEvent, Question};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    fn playing(variant: GameVariant, questions: Vec<Question>) -> GameState {
        GameState::with_questions(variant, questions)
            .apply(GameEvent::StartGame {
                first: "Alice".into(),
                second: "Bob".into(),
            })
            .state
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in [Screen::Setup, Screen::Playing, Screen::Results] {
            assert_eq!(handle_key_event(screen, ctrl_c()), KeyAction::Quit);
        }
    }

    #[test]
    fn test_setup_keys() {
        assert_eq!(
            handle_key_event(Screen::Setup, press(KeyCode::Char('q'))),
            KeyAction::InsertChar('q')
        );
        assert_eq!(
            handle_key_event(Screen::Setup, press(KeyCode::Tab)),
            KeyAction::SwitchField
        );
        assert_eq!(
            handle_key_event(Screen::Setup, press(KeyCode::Enter)),
            KeyAction::SubmitNames
        );
        assert_eq!(
            handle_key_event(Screen::Setup, press(KeyCode::Backspace)),
            KeyAction::DeleteChar
        );
        // Esc does not leave the form
        assert_eq!(
            handle_key_event(Screen::Setup, press(KeyCode::Esc)),
            KeyAction::None
        );
    }

    #[test]
    fn test_playing_keys() {
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Char('a'))),
            KeyAction::Answer {
                participant: ParticipantId::First,
                key: AnswerKey::Primary,
            }
        );
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Char('S'))),
            KeyAction::Answer {
                participant: ParticipantId::First,
                key: AnswerKey::Secondary,
            }
        );
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Char('k'))),
            KeyAction::Answer {
                participant: ParticipantId::Second,
                key: AnswerKey::Primary,
            }
        );
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Char('l'))),
            KeyAction::Answer {
                participant: ParticipantId::Second,
                key: AnswerKey::Secondary,
            }
        );
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(
            handle_key_event(Screen::Playing, press(KeyCode::Esc)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_results_keys() {
        assert_eq!(
            handle_key_event(Screen::Results, press(KeyCode::Enter)),
            KeyAction::PlayAgain
        );
        assert_eq!(
            handle_key_event(Screen::Results, press(KeyCode::Char('r'))),
            KeyAction::PlayAgain
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(Screen::Playing, key), KeyAction::None);
    }

    #[test]
    fn test_self_judged_payloads() {
        let game = playing(GameVariant::SelfJudged, vec!["Q1".into()]);
        assert_eq!(AnswerKey::Primary.payload(&game), AnswerPayload::correct());
        assert_eq!(
            AnswerKey::Secondary.payload(&game),
            AnswerPayload::incorrect()
        );
        assert_eq!(AnswerKey::Primary.label(&game), "Correct");
    }

    #[test]
    fn test_matching_payloads_use_choices() {
        let game = playing(GameVariant::Matching, vec!["Who cooks more?".into()]);
        assert_eq!(AnswerKey::Primary.payload(&game), AnswerPayload::choice("Alice"));
        assert_eq!(AnswerKey::Secondary.payload(&game), AnswerPayload::choice("Bob"));

        let game = playing(
            GameVariant::Matching,
            vec![Question::new("Tea or coffee?").with_options("Tea", "Coffee")],
        );
        assert_eq!(AnswerKey::Secondary.label(&game), "Coffee");
    }
}
