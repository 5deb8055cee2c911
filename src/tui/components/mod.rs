//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with title, question count, status hint
//! - `ProgressPanel`: Side panel with progress gauge, streak, and hints
//!
//! ### Components that record hit regions
//!
//! These draw clickable parts and write their rects into the shared `HitMap`
//! so the event loop can resolve mouse clicks:
//! - `QuestionCard`: Prompt, option buttons, Back/Next buttons
//! - `Summary`: Final score card with the Play again button
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `OptionCursor`: Keyboard highlight over the current question's options
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── progress_panel.rs  (Progress, streak, category, how it works)
//! ├── question_card.rs   (Active question + option cursor)
//! └── summary.rs         (Completion view)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod progress_panel;
pub mod question_card;
pub mod summary;
pub use progress_panel::ProgressPanel;
pub use question_card::{CardEvent, OptionCursor, QuestionCard};
pub use summary::Summary;
