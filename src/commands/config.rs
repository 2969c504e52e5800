use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use tco_advisor::config::{self, Config};

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Server: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Provider: {} ({})",
        if cfg.gemini.enabled { "enabled" } else { "disabled" },
        cfg.gemini.model
    );
    println!("  CORS origins: {}", cfg.cors.allowed_origins.len());

    Ok(())
}

/// Sanitize secrets in configuration for safe display
///
/// Masks the API key to show only the first 4 and last 4 characters
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.gemini.api_key = mask_api_key(&sanitized.gemini.api_key);
    sanitized
}

fn mask_api_key(key: &str) -> String {
    // Slice on char boundaries; keys are not guaranteed to be ASCII.
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
