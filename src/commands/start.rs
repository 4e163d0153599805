use anyhow::Result;
use colored::Colorize;
use rental_quote::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Initialize tracing with the configured level and format
/// 3. Start the server
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting rental quote server...".green());

    let cfg = config::load_config(config_path)?;

    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    info!(
        "Configuration loaded from {} (missing files fall back to defaults)",
        config_path.display()
    );

    // Blocks until shutdown
    server::start_server(cfg, config_path.to_path_buf()).await?;

    Ok(())
}
