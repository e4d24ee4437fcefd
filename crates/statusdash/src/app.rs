//! Demo entry point and dispatch.

use std::thread::sleep;

use anyhow::Result;
use statusdash_cli::progress_bar::StandaloneProgressBar;
use statusdash_cli::ui::{print_done, print_title};
use statusdash_core::{AttributeKind, AttributeValue};
use statusdash_tui::TerminalDashboard;

use crate::config::AppConfig;

/// Run the demo.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        statusdash_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.dashboard {
        return run_dashboard(config);
    }

    run_bar(config)
}

/// Value reached after `step` of `steps` updates on a scale up to `max`.
#[must_use]
pub fn scaled_value(step: u64, steps: u64, max: i64) -> i64 {
    if steps == 0 {
        return max;
    }
    let max = i128::from(max);
    let value = max.saturating_mul(i128::from(step)) / i128::from(steps);
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn run_bar(config: &AppConfig) -> Result<()> {
    let bar_config = config.bar_config()?;
    print_title(&format!("{} ({} steps)", bar_config.name, config.steps));
    let mut bar = StandaloneProgressBar::create(&bar_config)?;

    for step in 1..=config.steps {
        sleep(config.delay());
        bar.update(scaled_value(step, config.steps, bar_config.max_value))?;
    }
    bar.finish()?;

    print_done(&format!("{}: {} updates", bar_config.name, config.steps));
    Ok(())
}

fn run_dashboard(config: &AppConfig) -> Result<()> {
    let total = i64::try_from(config.steps).unwrap_or(i64::MAX).max(1);
    let logged = config.log.is_some();

    let mut dash = TerminalDashboard::open(&config.dashboard_config())?;
    dash.add_attribute("progress", AttributeKind::ProgressBar, logged, total)?;
    dash.add_attribute("completed", AttributeKind::Percentage, false, total)?;
    dash.add_attribute("batches", AttributeKind::Division, false, total)?;
    dash.add_attribute("processed", AttributeKind::Counter, logged, 0)?;
    dash.add_attribute("state", AttributeKind::Status, false, 0)?;
    dash.update_attribute("state", "starting")?;

    for step in 1..=config.steps {
        sleep(config.delay());
        let done = AttributeValue::from(step);
        dash.update_many([
            ("progress", done.clone()),
            ("completed", done.clone()),
            ("batches", done),
            ("processed", AttributeValue::from(step.saturating_mul(3))),
            ("state", AttributeValue::from("running")),
        ])?;
    }

    dash.update_attribute("state", "done")?;
    sleep(config.delay() * 10);
    dash.close()?;

    print_done(&format!("dashboard: {} updates", config.steps));
    Ok(())
}
