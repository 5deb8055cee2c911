//! # Actions
//!
//! Everything that can happen in a quiz becomes an `Action`.
//! User picks an answer? That's `Action::SelectOption(i)`.
//! User hits Next? That's `Action::Advance`.
//!
//! The `update()` function takes the current quiz and an action, applies it,
//! and returns an `Effect` telling the adapter what to do next. No I/O here.
//!
//! ```text
//! Quiz + Action  →  update()  →  Quiz' + Effect
//! ```
//!
//! Invalid actions (Advance with nothing selected, Retreat on the first
//! question, an option index past the end) leave the quiz untouched and
//! return `Effect::None`.

use log::{debug, info, warn};

use crate::core::state::{Quiz, WELCOME_STATUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectOption(usize),
    Advance,
    Retreat,
    Restart,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; redraw.
    Render,
    Quit,
}

pub fn update(quiz: &mut Quiz, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectOption(option) => {
            if quiz.select_option(option) {
                quiz.status_message = String::from("Ready when you are");
                Effect::Render
            } else {
                warn!(
                    "Ignoring SelectOption({}) at index {} of {}",
                    option,
                    quiz.current_index(),
                    quiz.total()
                );
                Effect::None
            }
        }
        Action::Advance => match quiz.advance() {
            Some(_) => {
                quiz.status_message = if quiz.is_complete() {
                    info!("Quiz complete: {} of {}", quiz.score(), quiz.total());
                    String::from("Well played")
                } else {
                    String::from(WELCOME_STATUS)
                };
                Effect::Render
            }
            None if quiz.is_complete() => Effect::None,
            None => {
                quiz.status_message = String::from("Pick an option first");
                Effect::Render
            }
        },
        Action::Retreat => {
            if quiz.retreat() {
                quiz.status_message = String::from(WELCOME_STATUS);
                Effect::Render
            } else {
                debug!("Retreat ignored at index {}", quiz.current_index());
                Effect::None
            }
        }
        Action::Restart => {
            info!("Restarting quiz (previous score {})", quiz.score());
            quiz.restart();
            quiz.status_message = String::from(WELCOME_STATUS);
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}
