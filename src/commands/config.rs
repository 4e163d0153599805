use anyhow::Result;
use colored::Colorize;
use rental_quote::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file, env overrides and defaults) as TOML
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file {}", config_path.display());

    if !config_path.exists() {
        println!(
            "{}",
            format!("! {} not found, validating defaults", config_path.display()).yellow()
        );
    }

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {} ({})", "Logging".cyan(), cfg.server.log_level, cfg.server.log_format);
    println!("  {}: {}", "Templates".cyan(), cfg.server.templates_dir.as_deref().unwrap_or("built-in"));
    println!(
        "  {}: {}",
        "Metrics".cyan(),
        if cfg.metrics.enabled {
            cfg.metrics.endpoint.green()
        } else {
            "disabled".red()
        }
    );
    println!(
        "  {}: {}",
        "Weekend pricing".cyan(),
        enabled_label(cfg.pricing.weekend_pricing)
    );
    println!(
        "  {}: {}",
        "Whole-unit rounding".cyan(),
        enabled_label(cfg.pricing.round_to_whole_units)
    );

    info!("Configuration validation successful");
    Ok(())
}

fn enabled_label(enabled: bool) -> colored::ColoredString {
    if enabled {
        "enabled".green()
    } else {
        "disabled".red()
    }
}
