//! # Quiz State
//!
//! The whole session lives in one `Quiz` value. The TUI only reads it through
//! accessors and `view()`; changes go through `update(quiz, action)` in
//! action.rs, which calls the transition methods here.
//!
//! ```text
//! Quiz
//! ├── questions: QuestionSet        // injected, immutable
//! ├── scoring: ScoringMode          // how revisits affect the score
//! ├── current_index: usize          // 0..=N, N means complete
//! ├── selected: Option<usize>       // cleared whenever the index moves
//! ├── score: usize                  // correct answers so far
//! ├── answers: Vec<Option<bool>>    // last submitted correctness per question
//! └── status_message: String        // hint line for the title bar
//! ```
//!
//! ## Phases
//!
//! ```text
//!              SelectOption(i)
//!               ┌──────┐
//!               ▼      │
//!  ┌──────────────────────┐  Advance (index+1 == N)  ┌────────────────┐
//!  │ InProgress(i, s, sc) │ ───────────────────────▶ │ Complete(sc)   │
//!  └──────────────────────┘                          └────────────────┘
//!     ▲   │ Advance / Retreat                               │
//!     └───┘                                                 │
//!     ▲                          Restart                    │
//!     └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Going back
//!
//! With `ScoringMode::Cumulative` the score only ever grows on Advance, so
//! retreating past a correctly answered question and advancing through it
//! again counts it twice. `ScoringMode::PerQuestion` keeps the last answer
//! per question and recomputes the score from those instead.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::progress::{self, ProgressBucket};
use crate::core::question::{Question, QuestionSet};

/// How the score responds to revisiting questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Every correct Advance adds one, including repeat passes.
    #[default]
    Cumulative,
    /// Only the latest answer to each question counts.
    PerQuestion,
}

impl ScoringMode {
    pub fn label(self) -> &'static str {
        match self {
            ScoringMode::Cumulative => "cumulative",
            ScoringMode::PerQuestion => "per question",
        }
    }
}

/// Snapshot of where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress {
        index: usize,
        selected: Option<usize>,
        score: usize,
    },
    Complete {
        score: usize,
    },
}

/// Everything the question screen needs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView<'a> {
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
    pub selected: Option<usize>,
    pub category: &'a str,
    pub score: usize,
    pub completion: ProgressBucket,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub is_last: bool,
}

impl QuestionView<'_> {
    pub fn advance_label(&self) -> &'static str {
        if self.is_last { "Submit" } else { "Next step" }
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub score: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizView<'a> {
    Question(QuestionView<'a>),
    Summary(SummaryView),
}

pub const WELCOME_STATUS: &str = "Choose an answer";

pub struct Quiz {
    questions: QuestionSet,
    scoring: ScoringMode,
    current_index: usize,
    selected: Option<usize>,
    score: usize,
    answers: Vec<Option<bool>>,
    pub status_message: String,
}

impl Quiz {
    pub fn new(questions: QuestionSet, scoring: ScoringMode) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            scoring,
            current_index: 0,
            selected: None,
            score: 0,
            answers,
            status_message: String::from(WELCOME_STATUS),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.total()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete { score: self.score }
        } else {
            Phase::InProgress {
                index: self.current_index,
                selected: self.selected,
                score: self.score,
            }
        }
    }

    pub fn view(&self) -> QuizView<'_> {
        let total = self.total();
        match self.current_question() {
            None => QuizView::Summary(SummaryView {
                score: self.score,
                total,
                percent: progress::final_percent(self.score, total),
            }),
            Some(question) => QuizView::Question(QuestionView {
                number: self.current_index + 1,
                total,
                prompt: &question.prompt,
                options: &question.options,
                selected: self.selected,
                category: question.category_label(),
                score: self.score,
                completion: ProgressBucket::for_question(self.current_index, total),
                can_retreat: self.current_index > 0,
                can_advance: self.selected.is_some(),
                is_last: self.current_index + 1 == total,
            }),
        }
    }

    // ------------------------------------------------------------------------
    // Transitions. Each returns whether state changed; invalid calls are no-ops.
    // ------------------------------------------------------------------------

    pub(crate) fn select_option(&mut self, option: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Submit the selected option and move on. Returns `Some(correct)` when
    /// the quiz advanced.
    pub(crate) fn advance(&mut self) -> Option<bool> {
        let question = self.current_question()?;
        let selected = self.selected?;
        let correct = question.is_correct(selected);

        self.answers[self.current_index] = Some(correct);
        self.selected = None;
        self.current_index += 1;
        match self.scoring {
            ScoringMode::Cumulative => {
                if correct {
                    self.score += 1;
                }
            }
            ScoringMode::PerQuestion => self.recompute_score(),
        }
        debug!(
            "Advanced to {} of {} (correct={}, score={})",
            self.current_index,
            self.total(),
            correct,
            self.score
        );
        Some(correct)
    }

    pub(crate) fn retreat(&mut self) -> bool {
        if self.is_complete() || self.current_index == 0 {
            return false;
        }
        self.selected = None;
        self.current_index -= 1;
        if self.scoring == ScoringMode::PerQuestion {
            self.recompute_score();
        }
        true
    }

    pub(crate) fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
    }

    fn recompute_score(&mut self) {
        self.score = self.answers[..self.current_index]
            .iter()
            .filter(|a| **a == Some(true))
            .count();
    }
}
