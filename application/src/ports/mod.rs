//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement,
//! and the events the application emits towards the presentation layer.

pub mod question_source;
pub mod ui_event;
