//! Structured configuration validation findings.
//!
//! Loaders report what they found wrong with a configuration file as
//! [`ConfigIssue`]s instead of failing outright, so the binary can decide
//! which ones are fatal.
//!
//! # Examples
//!
//! ```
//! use quiz_domain::config::{ConfigIssue, Severity};
//!
//! let issue = ConfigIssue::missing_value("questions.source", "a question list is required");
//! assert_eq!(issue.severity, Severity::Error);
//! assert!(issue.is_fatal());
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not match any known enum value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is out of its usable range.
    OutOfRange { field: String, value: u64 },
    /// A required field is empty.
    MissingValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn invalid_enum_value(field: &str, value: &str, valid_values: &[&str]) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid_values.iter().map(|v| v.to_string()).collect(),
            },
            message: format!(
                "{}: unknown value '{}', expected one of: {}",
                field,
                value,
                valid_values.join(", ")
            ),
        }
    }

    pub fn out_of_range(field: &str, value: u64, fallback: u64) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value,
            },
            message: format!("{field}: {value} is out of range, falling back to {fallback}"),
        }
    }

    pub fn missing_value(field: &str, reason: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::MissingValue {
                field: field.to_string(),
            },
            message: format!("{field}: {reason}"),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}
