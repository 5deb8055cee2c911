use crate::core::state::{Quiz, QuizView};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProgressPanel, QuestionCard, Summary, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Below this width the progress panel is dropped and the question card
/// takes the whole main area.
const SIDE_PANEL_MIN_WIDTH: u16 = 90;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Option(usize),
    Back,
    Next,
    Restart,
}

/// Clickable regions recorded during the last render pass.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Given a screen coordinate, find what (if anything) was drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

pub fn draw_ui(frame: &mut Frame, quiz: &Quiz, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    tui.hit_map.clear();

    let mut title_bar = TitleBar::new(
        tui.title.clone(),
        quiz.total(),
        quiz.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    let help_text = match quiz.view() {
        QuizView::Question(view) => {
            if main_area.width >= SIDE_PANEL_MIN_WIDTH {
                let [panel_area, card_area] =
                    Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                        .areas(main_area);
                ProgressPanel::new(&view).render(frame, panel_area);
                QuestionCard::new(&view, &tui.cursor, tui.hovered, &mut tui.hit_map)
                    .render(frame, card_area);
            } else {
                QuestionCard::new(&view, &tui.cursor, tui.hovered, &mut tui.hit_map)
                    .render(frame, main_area);
            }
            " ↑↓ Move  Space/Enter Choose  1-9 Pick  → Next  ← Back  q Quit "
        }
        QuizView::Summary(view) => {
            let hovered = tui.hovered == Some(HitTarget::Restart);
            Summary::new(view, hovered, &mut tui.hit_map).render(frame, main_area);
            " r/Enter Play again  q Quit "
        }
    };

    frame.render_widget(
        Line::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        help_area,
    );
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_quiz;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(quiz: &Quiz, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, quiz, tui);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_question_screen() {
        let quiz = test_quiz();
        let mut tui = TuiState::new("Curiosity Lab".to_string());
        let text = draw(&quiz, &mut tui, 120, 40);

        assert!(text.contains("Curiosity Lab"));
        assert!(text.contains("What sound does a cat make?"));
        assert!(text.contains("Meow"));
        assert!(text.contains("Animal basics"));
        assert!(text.contains("Session completion"));
        assert!(text.contains("25%"));
        assert!(text.contains("Next step"));
    }

    #[test]
    fn test_narrow_terminal_drops_side_panel() {
        let quiz = test_quiz();
        let mut tui = TuiState::new("Curiosity Lab".to_string());
        let text = draw(&quiz, &mut tui, 60, 30);

        assert!(text.contains("What sound does a cat make?"));
        assert!(!text.contains("Session completion"));
    }

    #[test]
    fn test_draw_records_option_regions() {
        let quiz = test_quiz();
        let mut tui = TuiState::new("Curiosity Lab".to_string());
        draw(&quiz, &mut tui, 120, 40);

        let options: Vec<_> = tui
            .hit_map
            .regions
            .iter()
            .filter_map(|(area, target)| match target {
                HitTarget::Option(i) => Some((*i, *area)),
                _ => None,
            })
            .collect();
        assert_eq!(options.len(), 3);
        let (index, area) = options[1];
        assert_eq!(
            tui.hit_map.hit_test(area.x + 1, area.y + 1),
            Some(HitTarget::Option(index))
        );
        // Back is disabled on the first question, so it is not clickable.
        assert!(
            !tui.hit_map
                .regions
                .iter()
                .any(|(_, t)| *t == HitTarget::Back)
        );
    }

    #[test]
    fn test_draw_summary_screen() {
        let mut quiz = test_quiz();
        for option in [1, 0, 1, 0] {
            update(&mut quiz, Action::SelectOption(option));
            update(&mut quiz, Action::Advance);
        }
        let mut tui = TuiState::new("Curiosity Lab".to_string());
        let text = draw(&quiz, &mut tui, 100, 30);

        assert!(text.contains("You finished the quiz"));
        assert!(text.contains("50%"));
        assert!(text.contains("2 of 4 correct"));
        assert!(text.contains("Play again"));
        assert!(
            tui.hit_map
                .regions
                .iter()
                .any(|(_, t)| *t == HitTarget::Restart)
        );
    }

    #[test]
    fn test_hit_test_outside_regions() {
        let mut map = HitMap::default();
        map.push(Rect::new(2, 2, 4, 3), HitTarget::Next);
        assert_eq!(map.hit_test(3, 3), Some(HitTarget::Next));
        assert_eq!(map.hit_test(6, 3), None);
        assert_eq!(map.hit_test(3, 5), None);
    }
}
