use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Lifecycle
    Quit,
    ForceQuit, // Ctrl+C
    Resize,

    // Option list
    CursorUp,
    CursorDown,
    Choose,            // Space: select the highlighted option
    Submit,            // Enter: select, or advance if already selected
    PickOption(usize), // Digit keys, 0-based

    // Navigation
    Next,
    Back,
    Restart,

    // Mouse
    MouseMove(u16, u16),
    MouseClick(u16, u16),
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, waiting up to `timeout`. Read errors are treated as
/// "no event"; the loop simply polls again.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read() {
        Ok(event) => map_event(event),
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some platforms report releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Char(' ')) => Some(TuiEvent::Choose),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Char(c @ '1'..='9')) => {
            Some(TuiEvent::PickOption(c as usize - '1' as usize))
        }
        (_, KeyCode::Right) | (_, KeyCode::Char('n')) => Some(TuiEvent::Next),
        (_, KeyCode::Left) | (_, KeyCode::Char('b')) | (_, KeyCode::Backspace) => {
            Some(TuiEvent::Back)
        }
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        _ => None,
    }
}
