//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a single quiz question loaded from the question list
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
