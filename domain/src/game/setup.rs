//! Setup form validation

use thiserror::Error;

/// Errors reported by the setup form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Please enter names for both partners.")]
    MissingNames,

    #[error("Please enter two different names.")]
    SameNames,

    #[error("Questions are still loading, please try again.")]
    QuestionsLoading,
}

/// Trim both names; both must be non-empty and differ ignoring case.
///
/// Matching rounds use the names as the two choices, so equal names would
/// make every round agree.
pub fn validate_names(first: &str, second: &str) -> Result<(String, String), SetupError> {
    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() {
        return Err(SetupError::MissingNames);
    }
    if first.to_lowercase() == second.to_lowercase() {
        return Err(SetupError::SameNames);
    }
    Ok((first.to_string(), second.to_string()))
}
