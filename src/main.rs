// src/main.rs

use clap::Parser;
use std::io::{stdin, stdout};
use tracing::info;

use vanguard_headers::app::App;
use vanguard_headers::config::{Cli, ScanConfig};
use vanguard_headers::logging::initialize_logging;

// Scans run one at a time, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = ScanConfig::from(Cli::parse());
    let log_path = initialize_logging()?;
    info!(log = %log_path.display(), ?config, "Starting vanguard-headers.");

    let mut app = App::new(config);
    app.run(&mut stdin().lock(), &mut stdout().lock()).await;

    info!(state = ?app.state, export = ?app.export_status, "Run finished.");
    Ok(())
}
