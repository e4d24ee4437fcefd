//! # statusdash-cli
//!
//! Standalone progress bar, console messages, and shell completion.

pub mod completion;
pub mod progress_bar;
pub mod ui;

pub use progress_bar::StandaloneProgressBar;
