//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It plays
//! the part of the host runtime: it mounts the quiz (enters the alternate
//! screen), re-renders whenever state changes, dispatches input, and
//! unmounts (restores the terminal) on exit.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw. Click regions belong to the
//! frame on screen, so any state change clears them until the next draw;
//! a queued click can never land on a question that was not shown.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::question::QuestionSet;
use crate::core::state::{Quiz, QuizView};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, OptionCursor};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{HitMap, HitTarget};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core quiz logic)
pub struct TuiState {
    pub title: String,
    pub cursor: OptionCursor,
    /// What the mouse is over, for hover styling
    pub hovered: Option<HitTarget>,
    /// Clickable regions from the last draw
    pub hit_map: HitMap,
}

impl TuiState {
    pub fn new(title: String) -> Self {
        Self {
            title,
            cursor: OptionCursor::new(),
            hovered: None,
            hit_map: HitMap::default(),
        }
    }

    /// Keep the option cursor in step with the quiz.
    fn sync(&mut self, quiz: &Quiz) {
        if let QuizView::Question(view) = quiz.view() {
            self.cursor
                .sync(view.number, view.options.len(), view.selected);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one input event into at most one quiz action. TUI-local events
/// (cursor movement, hover) update `tui` and return `None`.
fn dispatch(event: TuiEvent, quiz: &Quiz, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::MouseMove(column, row) => {
            tui.hovered = tui.hit_map.hit_test(column, row);
            None
        }
        TuiEvent::MouseClick(column, row) => match tui.hit_map.hit_test(column, row)? {
            HitTarget::Option(i) => {
                tui.cursor.highlight(i);
                Some(Action::SelectOption(i))
            }
            HitTarget::Back => Some(Action::Retreat),
            HitTarget::Next => Some(Action::Advance),
            HitTarget::Restart => Some(Action::Restart),
        },
        TuiEvent::Next => Some(Action::Advance),
        TuiEvent::Back => Some(Action::Retreat),
        // Restart is only bound on the summary screen so a stray key can't
        // wipe a quiz in progress.
        TuiEvent::Restart | TuiEvent::Submit if quiz.is_complete() => Some(Action::Restart),
        TuiEvent::Restart => None,
        _ if quiz.is_complete() => None,
        _ => match tui.cursor.handle_event(&event)? {
            CardEvent::Select(i) => Some(Action::SelectOption(i)),
            CardEvent::Advance => Some(Action::Advance),
        },
    }
}

/// Apply one input event to the quiz.
fn handle_event(event: TuiEvent, quiz: &mut Quiz, tui: &mut TuiState) -> Effect {
    tui.sync(quiz);
    let Some(action) = dispatch(event, quiz, tui) else {
        return Effect::None;
    };
    let effect = update(quiz, action);
    if effect == Effect::Render {
        // The drawn regions no longer match the state
        tui.hit_map.clear();
        tui.hovered = None;
    }
    effect
}

/// Run the quiz in the terminal until the user quits.
pub fn run(config: &ResolvedConfig, questions: QuestionSet) -> std::io::Result<()> {
    let mut quiz = Quiz::new(questions, config.scoring);
    let mut tui = TuiState::new(config.title.clone());
    info!(
        "Starting quiz '{}' with {} question(s), {} scoring",
        config.title,
        quiz.total(),
        quiz.scoring().label()
    );

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Mouse capture unavailable: {}", e);
    }

    let result = event_loop(&mut terminal, &mut quiz, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!(
        "Quiz closed at question {} of {} (score {})",
        quiz.current_index(),
        quiz.total(),
        quiz.score()
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    quiz: &mut Quiz,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(quiz);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, quiz, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(event, quiz, tui) {
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::Render => debug!("State changed: {:?}", quiz.phase()),
                Effect::None => {}
            }
        }
    }
}
