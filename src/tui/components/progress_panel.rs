//! # Progress Panel
//!
//! Left-hand panel on the question screen: position, the bucketed completion
//! gauge, the running score, the current choice, and a short how-to.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::QuestionView;
use crate::tui::component::Component;

const STAT_LABEL_WIDTH: usize = 18;

const HOW_IT_WORKS: [&str; 3] = [
    "Pick the option that feels right; no penalties for trying.",
    "Use the back arrow to revisit any question instantly.",
    "Hit submit on the final step to see your new score.",
];

pub struct ProgressPanel<'a> {
    view: &'a QuestionView<'a>,
}

impl<'a> ProgressPanel<'a> {
    pub fn new(view: &'a QuestionView<'a>) -> Self {
        Self { view }
    }

    fn stat_line(label: &'a str, value: String, value_style: Style) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{label:<width$}", width = STAT_LABEL_WIDTH),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(value, value_style),
        ])
    }
}

impl Component for ProgressPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Progress ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, gauge_area, completion_area, _, stats_area, _, help_area] =
            Layout::vertical([
                Length(2),
                Length(1),
                Length(1),
                Length(1),
                Length(3),
                Length(1),
                Min(0),
            ])
            .areas(inner);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    self.view.number.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" / {}", self.view.total),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(Span::styled(
                "+1 for each correct answer",
                Style::default().fg(Color::Green),
            )),
        ]);
        frame.render_widget(header, header_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::Black))
            .ratio(self.view.completion.ratio())
            .label("");
        frame.render_widget(gauge, gauge_area);

        let [completion_label, completion_value] =
            Layout::horizontal([Min(0), Length(4)]).areas(completion_area);
        frame.render_widget(
            Span::styled("Session completion", Style::default().fg(Color::Gray)),
            completion_label,
        );
        frame.render_widget(
            Line::from(self.view.completion.label()).right_aligned(),
            completion_value,
        );

        let value_width = (stats_area.width as usize).saturating_sub(STAT_LABEL_WIDTH);
        let selected = truncate_to_width(
            self.view.selected_text().unwrap_or("Choose an answer"),
            value_width,
        );
        let stats = Paragraph::new(vec![
            Self::stat_line(
                "Current streak",
                format!("{} correct", self.view.score),
                Style::default().fg(Color::Green),
            ),
            Self::stat_line("Selected option", selected, Style::default().fg(Color::Cyan)),
            Self::stat_line(
                "Category",
                self.view.category.to_string(),
                Style::default().fg(Color::LightBlue),
            ),
        ]);
        frame.render_widget(stats, stats_area);

        let mut help_lines = vec![Line::from(Span::styled(
            "How it works",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        help_lines.extend(HOW_IT_WORKS.iter().map(|tip| Line::from(format!("• {tip}"))));
        frame.render_widget(
            Paragraph::new(help_lines).wrap(Wrap { trim: true }),
            help_area,
        );
    }
}

/// Truncate to `max_width` terminal columns, ending in "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::ProgressBucket;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_panel_shows_position_and_streak() {
        let options = vec!["Blue".to_string(), "Yellow".to_string()];
        let view = QuestionView {
            number: 3,
            total: 4,
            prompt: "What color are ripe bananas?",
            options: &options,
            selected: Some(1),
            category: "Everyday life",
            score: 2,
            completion: ProgressBucket::ThreeQuarter,
            can_retreat: true,
            can_advance: true,
            is_last: false,
        };

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProgressPanel::new(&view).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("3 / 4"));
        assert!(text.contains("75%"));
        assert!(text.contains("2 correct"));
        assert!(text.contains("Yellow"));
        assert!(text.contains("Everyday life"));
        assert!(text.contains("How it works"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Ice Cream", 20), "Ice Cream");
        assert_eq!(truncate_to_width("Ice Cream", 5), "Ice …");
        assert_eq!(truncate_to_width("猫猫猫", 4), "猫…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_panel_prompts_for_choice_when_nothing_selected() {
        let options = vec!["a".to_string(), "b".to_string()];
        let view = QuestionView {
            number: 1,
            total: 2,
            prompt: "?",
            options: &options,
            selected: None,
            category: "General",
            score: 0,
            completion: ProgressBucket::Half,
            can_retreat: false,
            can_advance: false,
            is_last: false,
        };

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProgressPanel::new(&view).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Choose an answer"));
    }
}
