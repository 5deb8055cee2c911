//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::question::{Question, QuestionSet};
use crate::core::state::{Quiz, ScoringMode};

/// `count` three-option questions whose correct answer is always index 1.
pub fn all_second_option_set(count: usize) -> QuestionSet {
    let questions = (1..=count)
        .map(|n| Question::new(format!("Question {n}?"), &["wrong", "right", "also wrong"], 1))
        .collect();
    QuestionSet::new(questions).expect("fixture questions are valid")
}

/// A quiz over the built-in questions with default scoring.
pub fn test_quiz() -> Quiz {
    Quiz::new(QuestionSet::builtin(), ScoringMode::Cumulative)
}
