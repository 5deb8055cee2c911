//! # Question Card
//!
//! The active question: prompt, one button per option, and the Back /
//! Next buttons underneath.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OptionCursor` lives in `TuiState` and tracks the keyboard highlight
//! - `QuestionCard` is created each frame with borrowed view data
//!
//! The highlight is separate from the quiz's selected option. Moving the
//! highlight changes nothing in the quiz; Space or Enter turns it into a
//! `SelectOption`, and Enter on an already-selected option advances.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::state::QuestionView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{HitMap, HitTarget};

/// Events emitted by the option cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Select(usize),
    Advance,
}

/// Keyboard highlight over the current question's options.
#[derive(Debug, Default)]
pub struct OptionCursor {
    pub highlighted: usize,
    question_number: usize,
    option_count: usize,
    selected: Option<usize>,
}

impl OptionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the quiz before handling events. Moving to another question
    /// puts the highlight back on the first option.
    pub fn sync(&mut self, question_number: usize, option_count: usize, selected: Option<usize>) {
        if question_number != self.question_number {
            self.question_number = question_number;
            self.highlighted = 0;
        }
        self.option_count = option_count;
        self.selected = selected;
        self.highlighted = self.highlighted.min(option_count.saturating_sub(1));
    }

    pub fn highlight(&mut self, option: usize) {
        if option < self.option_count {
            self.highlighted = option;
        }
    }
}

impl EventHandler for OptionCursor {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardEvent> {
        if self.option_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.highlighted = (self.highlighted + 1).min(self.option_count - 1);
                None
            }
            TuiEvent::Choose => Some(CardEvent::Select(self.highlighted)),
            TuiEvent::Submit => {
                if self.selected == Some(self.highlighted) {
                    Some(CardEvent::Advance)
                } else {
                    Some(CardEvent::Select(self.highlighted))
                }
            }
            TuiEvent::PickOption(i) if *i < self.option_count => {
                self.highlighted = *i;
                Some(CardEvent::Select(*i))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the active question.
pub struct QuestionCard<'a> {
    view: &'a QuestionView<'a>,
    cursor: &'a OptionCursor,
    hovered: Option<HitTarget>,
    hit_map: &'a mut HitMap,
}

impl<'a> QuestionCard<'a> {
    pub fn new(
        view: &'a QuestionView<'a>,
        cursor: &'a OptionCursor,
        hovered: Option<HitTarget>,
        hit_map: &'a mut HitMap,
    ) -> Self {
        Self {
            view,
            cursor,
            hovered,
            hit_map,
        }
    }

    fn option_block(&self, index: usize) -> Paragraph<'a> {
        let options: &'a [String] = self.view.options;
        let is_selected = self.view.selected == Some(index);
        let is_highlighted = self.cursor.highlighted == index;
        let is_hovered = self.hovered == Some(HitTarget::Option(index));

        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else if is_hovered || is_highlighted {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if is_selected {
            Span::styled(" Selected ", Style::default().fg(Color::Cyan))
        } else {
            Span::styled(" Tap to choose ", Style::default().fg(Color::DarkGray))
        };

        let pointer = if is_highlighted { "▸ " } else { "  " };
        let mut text_style = Style::default();
        if is_selected {
            text_style = text_style.bg(Color::Rgb(0xE4, 0xF4, 0xFF)).fg(Color::Black);
        }
        if is_highlighted {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let text = Line::from(vec![
            Span::raw(pointer),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::Gray)),
            Span::styled(options[index].as_str(), text_style),
        ]);
        let block = Block::bordered()
            .border_style(border_style)
            .title_top(Line::from(marker).right_aligned());
        Paragraph::new(text).block(block).wrap(Wrap { trim: true })
    }

    fn render_button(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        label: String,
        enabled: bool,
        target: HitTarget,
    ) {
        let style = if !enabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.hovered == Some(target) {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let button = Paragraph::new(label)
            .centered()
            .style(style)
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, area);
        if enabled {
            self.hit_map.push(area, target);
        }
    }
}

impl Component for QuestionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let badge = Span::styled(
            format!(" Q{} ", self.view.number),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        let category = Span::styled(
            format!(" {} ", self.view.category),
            Style::default().fg(Color::Green),
        );
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title_top(Line::from(badge))
            .title_top(Line::from(category).right_aligned())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let prompt = Paragraph::new(Span::styled(
            self.view.prompt,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true });
        let prompt_height = prompt.line_count(inner.width) as u16;

        let [label_area, prompt_area, _, options_area, buttons_area] = Layout::vertical([
            Length(1),
            Length(prompt_height),
            Length(1),
            Min(0),
            Length(3),
        ])
        .areas(inner);

        frame.render_widget(
            Span::styled("QUESTION", Style::default().fg(Color::Gray)),
            label_area,
        );
        frame.render_widget(prompt, prompt_area);

        // Options stack top to bottom; anything that doesn't fit is clipped.
        let mut y = options_area.y;
        let bottom = options_area.y + options_area.height;
        for index in 0..self.view.options.len() {
            let paragraph = self.option_block(index);
            let height = paragraph.line_count(options_area.width) as u16;
            if y >= bottom {
                break;
            }
            let option_area = Rect::new(
                options_area.x,
                y,
                options_area.width,
                height.min(bottom - y),
            );
            frame.render_widget(paragraph, option_area);
            self.hit_map.push(option_area, HitTarget::Option(index));
            y += height;
        }

        let [back_area, _, next_area] =
            Layout::horizontal([Length(12), Min(0), Length(16)]).areas(buttons_area);
        self.render_button(
            frame,
            back_area,
            "← Back".to_string(),
            self.view.can_retreat,
            HitTarget::Back,
        );
        let next_label = format!("{} →", self.view.advance_label());
        self.render_button(
            frame,
            next_area,
            next_label,
            self.view.can_advance,
            HitTarget::Next,
        );
    }
}
