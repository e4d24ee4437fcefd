//! Construction-time configuration for bars and dashboards.

use std::path::PathBuf;

use crate::constants::{
    AUTO_WIDTH, DEFAULT_BAR_NAME, DEFAULT_HEADER, DEFAULT_MAX_VALUE, MIN_BAR_WIDTH,
    STANDALONE_LABEL_RESERVE,
};
use crate::error::{DashError, Result};

/// Width of a standalone bar's fillable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarWidth {
    /// Fill the terminal, leaving room for the label and percentage.
    Auto,
    /// Exactly this many cells.
    Fixed(usize),
}

impl BarWidth {
    /// `-1` means [`BarWidth::Auto`], positive values are fixed, anything
    /// else is rejected.
    pub fn from_raw(width: i64) -> Result<Self> {
        match width {
            AUTO_WIDTH => Ok(Self::Auto),
            w if w > 0 => usize::try_from(w)
                .map(Self::Fixed)
                .map_err(|_| DashError::InvalidConfig(format!("bar width {w} is too large"))),
            w => Err(DashError::InvalidConfig(format!(
                "bar width has to be at least 1 or exactly -1 for auto width, got {w}"
            ))),
        }
    }

    /// Cells available for the bar of `name` in a terminal of `columns`.
    #[must_use]
    pub fn resolve(self, columns: u16, name: &str) -> usize {
        match self {
            Self::Fixed(w) => w,
            Self::Auto => usize::from(columns)
                .saturating_sub(name.chars().count() + STANDALONE_LABEL_RESERVE)
                .max(MIN_BAR_WIDTH),
        }
    }
}

/// Standalone progress bar settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub name: String,
    pub max_value: i64,
    pub width: BarWidth,
}

impl BarConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: BarWidth) -> Self {
        self.width = width;
        self
    }

    /// Reject a non-positive maximum.
    pub fn validate(&self) -> Result<()> {
        if self.max_value <= 0 {
            return Err(DashError::InvalidConfig(format!(
                "bar '{}' needs a positive maximum value, got {}",
                self.name, self.max_value
            )));
        }
        Ok(())
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BAR_NAME.to_string(),
            max_value: DEFAULT_MAX_VALUE,
            width: BarWidth::Auto,
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Title centered at the top of the viewport.
    pub header: String,
    /// Optional append-only update log.
    pub log_path: Option<PathBuf>,
}

impl DashboardConfig {
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            log_path: None,
        }
    }

    #[must_use]
    pub fn with_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_widths() {
        assert_eq!(BarWidth::from_raw(-1).unwrap(), BarWidth::Auto);
        assert_eq!(BarWidth::from_raw(30).unwrap(), BarWidth::Fixed(30));
        assert!(matches!(
            BarWidth::from_raw(0),
            Err(DashError::InvalidConfig(_))
        ));
        assert!(matches!(
            BarWidth::from_raw(-2),
            Err(DashError::InvalidConfig(_))
        ));
    }

    #[test]
    fn auto_width_reserves_label() {
        // 80 - (7 + 19)
        assert_eq!(BarWidth::Auto.resolve(80, "Process"), 54);
        assert_eq!(BarWidth::Fixed(12).resolve(80, "Process"), 12);
        assert_eq!(BarWidth::Auto.resolve(10, "Process"), 1);
    }

    #[test]
    fn bar_defaults() {
        let cfg = BarConfig::default();
        assert_eq!(cfg.name, "Process");
        assert_eq!(cfg.max_value, 100);
        assert_eq!(cfg.width, BarWidth::Auto);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bar_needs_positive_max() {
        let cfg = BarConfig::new("copy").with_max_value(0);
        assert!(matches!(cfg.validate(), Err(DashError::InvalidConfig(_))));
    }

    #[test]
    fn dashboard_defaults() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.header, "My Advanced Status Window");
        assert!(cfg.log_path.is_none());

        let cfg = DashboardConfig::new("Sync").with_log("/tmp/sync.log");
        assert_eq!(cfg.log_path.as_deref(), Some(std::path::Path::new("/tmp/sync.log")));
    }
}
