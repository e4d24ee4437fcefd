//! Demo configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use statusdash_core::constants::{DEFAULT_BAR_NAME, DEFAULT_HEADER};
use statusdash_core::{BarConfig, BarWidth, DashboardConfig, Result};

/// statusdash: live terminal progress bar and status dashboard demo.
#[derive(Parser, Debug)]
#[command(name = "statusdash", version, about)]
pub struct AppConfig {
    /// Show the full-screen dashboard instead of a single progress bar.
    #[arg(long)]
    pub dashboard: bool,

    /// Name printed in front of the progress bar.
    #[arg(long, default_value = DEFAULT_BAR_NAME)]
    pub name: String,

    /// Dashboard header.
    #[arg(long, default_value = DEFAULT_HEADER)]
    pub header: String,

    /// Number of updates to drive.
    #[arg(short = 'n', long, default_value = "100", env = "STATUSDASH_STEPS")]
    pub steps: u64,

    /// Value at which the bar is full.
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    pub max: i64,

    /// Bar width in cells, or -1 to fit the terminal.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub width: i64,

    /// Pause between updates, in milliseconds.
    #[arg(long, default_value = "20")]
    pub delay_ms: u64,

    /// Append logged dashboard updates to this file.
    #[arg(long, env = "STATUSDASH_LOG")]
    pub log: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Standalone bar settings; fails on a width other than `-1` or positive.
    pub fn bar_config(&self) -> Result<BarConfig> {
        let config = BarConfig::new(self.name.clone())
            .with_max_value(self.max)
            .with_width(BarWidth::from_raw(self.width)?);
        config.validate()?;
        Ok(config)
    }

    /// Dashboard settings.
    #[must_use]
    pub fn dashboard_config(&self) -> DashboardConfig {
        let config = DashboardConfig::new(self.header.clone());
        match &self.log {
            Some(path) => config.with_log(path),
            None => config,
        }
    }

    /// Pause between updates.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
