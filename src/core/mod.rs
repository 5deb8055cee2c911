//! # Core Quiz Logic
//!
//! This module contains the quiz's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Quiz (session state) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O in the reducer. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   --check  │      │   tests    │
//!     │  Adapter   │      │   report   │      │            │
//!     │ (ratatui)  │      │  (main.rs) │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`question`]: `Question` and the validated `QuestionSet`
//! - [`state`]: The `Quiz` struct: all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`progress`]: Percentages and progress buckets for display
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod progress;
pub mod question;
pub mod state;
