//! Curiosity Lab library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::action::{Action, Effect, update};
pub use crate::core::question::{Question, QuestionError, QuestionSet};
pub use crate::core::state::{Phase, Quiz, QuizView, ScoringMode};
