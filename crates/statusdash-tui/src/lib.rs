//! # statusdash-tui
//!
//! Full-screen attribute dashboard drawn with ratatui.

pub mod dashboard;
pub mod header;
pub mod styles;
pub mod terminal;
pub mod view;

pub use dashboard::{Dashboard, TerminalDashboard};
pub use styles::ColorTheme;
