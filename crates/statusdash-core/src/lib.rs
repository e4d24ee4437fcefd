//! # statusdash-core
//!
//! Attribute model shared by the statusdash progress bar and dashboard:
//! kinds, values, bar geometry, the per-dashboard registry and the update log.

pub mod attribute;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod kind;
pub mod registry;
pub mod sink;
pub mod value;

// Re-exports
pub use attribute::DisplayAttribute;
pub use config::{BarConfig, BarWidth, DashboardConfig};
pub use error::{DashError, Result};
pub use kind::AttributeKind;
pub use registry::AttributeRegistry;
pub use sink::LogSink;
pub use value::AttributeValue;
