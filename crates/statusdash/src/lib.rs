//! statusdash demo library: configuration and drivers for the demo binary.

pub mod app;
pub mod config;
pub mod errors;
