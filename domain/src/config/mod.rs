//! Configuration-related domain types shared by loaders and the binary.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
