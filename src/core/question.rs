//! # Questions
//!
//! The data a quiz runs over. A `QuestionSet` is validated once when it is
//! built and is immutable afterwards, so the state machine never has to deal
//! with an empty quiz or a question it cannot answer.
//!
//! ```text
//! QuestionSet
//! └── questions: Vec<Question>
//!     ├── prompt: String
//!     ├── options: Vec<String>     // at least MIN_OPTIONS
//!     ├── correct_option: usize    // index into options
//!     └── category: Option<String> // "General" when absent
//! ```
//!
//! Sets come either from the built-in list or from a TOML file:
//!
//! ```toml
//! [[questions]]
//! prompt = "What sound does a cat make?"
//! options = ["Bark", "Meow", "Oink"]
//! answer = 1
//! category = "Animal basics"
//! ```

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Label shown for questions without a category.
pub const DEFAULT_CATEGORY: &str = "General";

/// A question needs at least this many options to be a choice.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option: usize,
    #[serde(default)]
    pub category: Option<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct_option: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    /// Checks a single question; `number` is its 1-based position for messages.
    fn validate(&self, number: usize) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { number });
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                number,
                found: self.options.len(),
            });
        }
        if self.correct_option >= self.options.len() {
            return Err(QuestionError::AnswerOutOfRange {
                number,
                answer: self.correct_option,
                options: self.options.len(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("question set is empty")]
    Empty,
    #[error("question {number} has an empty prompt")]
    EmptyPrompt { number: usize },
    #[error(
        "question {number} has {found} option(s), at least {min} are required",
        min = MIN_OPTIONS
    )]
    TooFewOptions { number: usize, found: usize },
    #[error("question {number} answer index {answer} is out of range for {options} option(s)")]
    AnswerOutOfRange {
        number: usize,
        answer: usize,
        options: usize,
    },
    #[error("failed to read question file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question file parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Question Set
// ============================================================================

/// On-disk layout of a question file.
#[derive(Debug, Default, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// A validated, non-empty, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validates `questions` and wraps them. Degenerate input is rejected here
    /// rather than surfacing later as a broken quiz.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index + 1)?;
        }
        Ok(Self { questions })
    }

    /// The four questions the quiz ships with.
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                Question::new("What sound does a cat make?", &["Bark", "Meow", "Oink"], 1)
                    .with_category("Animal basics"),
                Question::new(
                    "What would you probably find in your fridge?",
                    &["Shoes", "Ice Cream", "Books"],
                    1,
                )
                .with_category("Common sense"),
                Question::new("What color are ripe bananas?", &["Blue", "Yellow", "Red"], 1)
                    .with_category("Everyday life"),
                Question::new(
                    "How many stars are in the sky?",
                    &["Two", "Countless", "One Hundred"],
                    1,
                )
                .with_category("Space"),
            ],
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, QuestionError> {
        let file: QuestionFile = toml::from_str(contents)?;
        debug!("Parsed {} question(s)", file.questions.len());
        Self::new(file.questions)
    }

    /// Load and validate a question file.
    pub fn load(path: &Path) -> Result<Self, QuestionError> {
        let contents = fs::read_to_string(path).map_err(|source| QuestionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_toml_str(&contents)?;
        info!("Loaded {} question(s) from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// One line per question with its category and option count, as printed
    /// by `--check`.
    pub fn check_report(&self) -> String {
        let mut report = format!("{} question(s) OK\n", self.len());
        for (i, question) in self.iter().enumerate() {
            report.push_str(&format!(
                "  {:>2}. [{}] {} ({} options)\n",
                i + 1,
                question.category_label(),
                question.prompt,
                question.options.len()
            ));
        }
        report
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set_is_valid() {
        let builtin = QuestionSet::builtin();
        let revalidated = QuestionSet::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(revalidated, builtin);
        assert_eq!(builtin.len(), 4);
        assert!(!builtin.is_empty());
        assert!(builtin.iter().all(|q| q.correct_option == 1));
    }

    #[test]
    fn test_check_report_lists_every_question() {
        let set = QuestionSet::new(vec![
            Question::new("2 + 2?", &["3", "4"], 1).with_category("Math"),
            Question::new("Sky color?", &["Blue", "Green", "Red"], 0),
        ])
        .unwrap();
        assert_eq!(
            set.check_report(),
            "2 question(s) OK\n   1. [Math] 2 + 2? (2 options)\n   2. [General] Sky color? (3 options)\n"
        );
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(QuestionSet::new(vec![]), Err(QuestionError::Empty)));
    }

    #[test]
    fn test_single_option_rejected() {
        let questions = vec![
            Question::new("ok", &["a", "b"], 0),
            Question::new("lonely", &["only"], 0),
        ];
        match QuestionSet::new(questions) {
            Err(QuestionError::TooFewOptions { number, found }) => {
                assert_eq!(number, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected TooFewOptions, got {:?}", other),
        }
    }

    #[test]
    fn test_answer_out_of_range_rejected() {
        let err = QuestionSet::new(vec![Question::new("q", &["a", "b"], 2)]).unwrap_err();
        assert!(matches!(
            err,
            QuestionError::AnswerOutOfRange {
                number: 1,
                answer: 2,
                options: 2
            }
        ));
        assert_eq!(
            err.to_string(),
            "question 1 answer index 2 is out of range for 2 option(s)"
        );
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let err = QuestionSet::new(vec![Question::new("   ", &["a", "b"], 0)]).unwrap_err();
        assert!(matches!(err, QuestionError::EmptyPrompt { number: 1 }));
    }

    #[test]
    fn test_category_label_defaults_to_general() {
        let plain = Question::new("q", &["a", "b"], 0);
        assert_eq!(plain.category_label(), "General");
        let tagged = plain.with_category("Space");
        assert_eq!(tagged.category_label(), "Space");
    }

    #[test]
    fn test_toml_question_file_parses() {
        let toml_str = r#"
[[questions]]
prompt = "What sound does a cat make?"
options = ["Bark", "Meow", "Oink"]
answer = 1
category = "Animal basics"

[[questions]]
prompt = "Pick the even number"
options = ["3", "4"]
answer = 1
"#;
        let set = QuestionSet::from_toml_str(toml_str).unwrap();
        assert_eq!(set.len(), 2);
        let first = set.get(0).unwrap();
        assert_eq!(first.options, vec!["Bark", "Meow", "Oink"]);
        assert!(first.is_correct(1));
        assert_eq!(set.get(1).unwrap().category, None);
    }

    #[test]
    fn test_toml_without_questions_is_empty_error() {
        let err = QuestionSet::from_toml_str("# nothing here\n").unwrap_err();
        assert!(matches!(err, QuestionError::Empty));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = QuestionSet::from_toml_str("[[questions]]\nprompt = 3\n").unwrap_err();
        assert!(matches!(err, QuestionError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = QuestionSet::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, QuestionError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
