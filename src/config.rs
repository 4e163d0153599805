use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use crate::pricing::PricingPolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingPolicy,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Directory served as static assets under `/`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Directory served under `/pictures`
    #[serde(default = "default_pictures_dir")]
    pub pictures_dir: String,
    /// Optional directory holding `form.html` and `result.html`;
    /// the built-in templates are used when unset
    #[serde(default)]
    pub templates_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            static_dir: default_static_dir(),
            pictures_dir: default_pictures_dir(),
            templates_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_pictures_dir() -> String {
    "images".to_string()
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

/// Routes the server always mounts besides `/`
const RESERVED_PATHS: [&str; 2] = ["/api/quote", "/health"];

/// Load configuration from an optional TOML file, overridden by
/// `RENTAL_QUOTE__SECTION__KEY` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("RENTAL_QUOTE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Invalid server host: {}", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/': {}", cfg.metrics.endpoint);
    }

    let endpoint = cfg.metrics.endpoint.trim_end_matches('/');
    if endpoint.is_empty()
        || RESERVED_PATHS.contains(&endpoint)
        || endpoint == "/pictures"
        || endpoint.starts_with("/pictures/")
    {
        anyhow::bail!(
            "Metrics endpoint '{}' collides with a built-in route",
            cfg.metrics.endpoint
        );
    }

    let pricing = &cfg.pricing;

    for (name, value) in pricing.multipliers() {
        if !(value.is_finite() && value > 0.0) {
            anyhow::bail!("Pricing multiplier '{}' must be positive, got {}", name, value);
        }
    }

    if !(pricing.new_license_high_season_fee.is_finite()
        && pricing.new_license_high_season_fee >= 0.0)
    {
        anyhow::bail!(
            "new_license_high_season_fee cannot be negative, got {}",
            pricing.new_license_high_season_fee
        );
    }

    if pricing.young_driver_max_age < pricing.min_driver_age {
        anyhow::bail!(
            "young_driver_max_age ({}) is below min_driver_age ({})",
            pricing.young_driver_max_age,
            pricing.min_driver_age
        );
    }

    if pricing.currency_symbol.is_empty() {
        anyhow::bail!("currency_symbol cannot be empty");
    }

    Ok(())
}
