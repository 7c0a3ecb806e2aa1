//! Use cases (application services)

pub mod game_controller;
pub mod load_questions;
