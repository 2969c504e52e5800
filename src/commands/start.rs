use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use tco_advisor::{config, server};

/// Execute the start command
///
/// Loads the configuration and runs the server in the foreground until a
/// shutdown signal arrives.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting TCO advisor...".green());

    let cfg = config::load_config(config_path)?;
    info!("Configuration loaded from {}", config_path.display());

    server::start_server(cfg, config_path.to_path_buf()).await?;

    Ok(())
}
