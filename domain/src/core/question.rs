//! Question value object

use crate::participant::Participants;
use serde::{Deserialize, Serialize};

/// A single question shown to both participants (Value Object)
///
/// On the wire a question is `{ "question": "..." }`, optionally with an
/// `"options": ["...", "..."]` pair used by the matching variant. When no
/// options are given, the two participant names act as the choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<[String; 2]>,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Question cannot be empty");
        Self {
            text,
            options: None,
        }
    }

    /// Attach an explicit pair of choices
    pub fn with_options(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.options = Some([first.into(), second.into()]);
        self
    }

    /// Get the question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Explicit choices, if the question defines them
    pub fn options(&self) -> Option<&[String; 2]> {
        self.options.as_ref()
    }

    /// True when the text is blank (possible for deserialized input)
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The two choices offered in matching mode.
    ///
    /// Falls back to the participant names when the question has no options.
    pub fn choices<'a>(&'a self, participants: &'a Participants) -> [&'a str; 2] {
        match &self.options {
            Some([first, second]) => [first.as_str(), second.as_str()],
            None => participants.names(),
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Who is the better cook?");
        assert_eq!(q.text(), "Who is the better cook?");
        assert!(q.options().is_none());
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("  ");
    }

    #[test]
    fn test_choices_fall_back_to_names() {
        let participants = Participants::new("Alice", "Bob");
        let q = Question::new("Who said 'I love you' first?");
        assert_eq!(q.choices(&participants), ["Alice", "Bob"]);
    }

    #[test]
    fn test_choices_use_explicit_options() {
        let participants = Participants::new("Alice", "Bob");
        let q = Question::new("Beach or mountains?").with_options("Beach", "Mountains");
        assert_eq!(q.choices(&participants), ["Beach", "Mountains"]);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"[{"question": "Favorite movie?"}, {"question": "Tea or coffee?", "options": ["Tea", "Coffee"]}]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "Favorite movie?");
        assert_eq!(
            questions[1].options(),
            Some(&["Tea".to_string(), "Coffee".to_string()])
        );
    }

    #[test]
    fn test_deserialize_blank_is_detected() {
        let q: Question = serde_json::from_str(r#"{"question": "  "}"#).unwrap();
        assert!(q.is_blank());
    }
}
