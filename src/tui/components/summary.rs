//! # Summary Component
//!
//! Completion view: final percentage, raw score, and the Play again button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::core::state::SummaryView;
use crate::tui::component::Component;
use crate::tui::ui::{HitMap, HitTarget, centered_rect};

const BUTTON_WIDTH: u16 = 18;

pub struct Summary<'a> {
    view: SummaryView,
    hovered: bool,
    hit_map: &'a mut HitMap,
}

impl<'a> Summary<'a> {
    pub fn new(view: SummaryView, hovered: bool, hit_map: &'a mut HitMap) -> Self {
        Self {
            view,
            hovered,
            hit_map,
        }
    }

    fn body(&self) -> Vec<Line<'static>> {
        let muted = Style::default().fg(Color::Gray);
        vec![
            Line::from(Span::styled(
                "WELL PLAYED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "You finished the quiz",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Keep the streak alive! Each round sharpens your intuition.",
                muted,
            )),
            Line::from(""),
            Line::from(Span::styled("FINAL SCORE", muted)),
            Line::from(Span::styled(
                format!("{}%", self.view.percent),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} of {} correct", self.view.score, self.view.total),
                muted,
            )),
        ]
    }
}

impl Component for Summary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let card = centered_rect(80, 80, area);
        frame.render_widget(Clear, card);
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let body = self.body();
        let [body_area, _, button_row] = Layout::vertical([
            Length(body.len() as u16),
            Length(1),
            Length(3),
        ])
        .flex(Flex::Center)
        .areas(inner);

        frame.render_widget(Paragraph::new(body).centered(), body_area);

        let [button_area] = Layout::horizontal([Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(button_row);
        let style = if self.hovered {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let button = Paragraph::new("Play again ↻")
            .centered()
            .style(style)
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, button_area);
        self.hit_map.push(button_area, HitTarget::Restart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_summary_shows_score() {
        let mut hit_map = HitMap::default();
        let view = SummaryView {
            score: 4,
            total: 4,
            percent: 100,
        };
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Summary::new(view, false, &mut hit_map).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("WELL PLAYED"));
        assert!(text.contains("100%"));
        assert!(text.contains("4 of 4 correct"));
        assert!(text.contains("Play again"));
    }

    #[test]
    fn test_play_again_button_is_clickable() {
        let mut hit_map = HitMap::default();
        let view = SummaryView {
            score: 1,
            total: 4,
            percent: 25,
        };
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Summary::new(view, false, &mut hit_map).render(f, f.area()))
            .unwrap();

        // Button is centered horizontally.
        let center_x = 40;
        let hit = (0..24).find_map(|row| hit_map.hit_test(center_x, row));
        assert_eq!(hit, Some(HitTarget::Restart));
    }
}
