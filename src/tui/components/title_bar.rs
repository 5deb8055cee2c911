//! # TitleBar Component
//!
//! Top status bar: quiz title, question count, and the status hint.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Curiosity Lab".to_string(), 4, "Choose an answer".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Curiosity Lab | 4 questions | No timers | Choose an answer"`
//! 2. **Default**: `"Curiosity Lab | 4 questions | No timers"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    pub title: String,
    pub question_count: usize,
    /// Transient hint (e.g. "Pick an option first")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, question_count: usize, status_message: String) -> Self {
        Self {
            title,
            question_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.question_count {
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled(
                self.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::raw(self.count_label()),
            separator.clone(),
            Span::raw("No timers"),
        ];
        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
