use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

/// Settings for the generative provider backing the consumption,
/// distance and recommendation calls
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub enabled: bool,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Browser origins allowed to call the API ("*" allows any)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .add_source(config::Environment::with_prefix("TCO_ADVISOR").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    if cfg.gemini.enabled {
        if cfg.gemini.api_key.is_empty() {
            anyhow::bail!("Gemini API key cannot be empty when the provider is enabled");
        }
        if cfg.gemini.base_url.is_empty() {
            anyhow::bail!("Gemini base URL cannot be empty when the provider is enabled");
        }
        if cfg.gemini.model.is_empty() {
            anyhow::bail!("Gemini model name cannot be empty when the provider is enabled");
        }
        if cfg.gemini.timeout_seconds == 0 {
            anyhow::bail!("Gemini timeout must be at least 1 second");
        }
    }

    if cfg.cors.allowed_origins.is_empty() {
        anyhow::bail!("At least one CORS origin must be configured (\"*\" allows any)");
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }

    Ok(())
}
