//! statusdash: live terminal progress bar and status dashboard demo.

use statusdash_cli::ui::print_failed;
use statusdash_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        print_failed(&format!("{err:#}"));
        std::process::exit(errors::exit_code_for(&err));
    }
}
