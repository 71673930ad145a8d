mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./imageshelf.toml", "~/.config/imageshelf/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.store.pool_size == 0 {
        anyhow::bail!("Store pool_size cannot be 0");
    }

    if config.edit.timeout_secs == 0 {
        anyhow::bail!("Edit timeout_secs cannot be 0");
    }

    if config.edit.model.trim().is_empty() {
        anyhow::bail!("Edit model cannot be empty");
    }

    let url = reqwest::Url::parse(&config.edit.base_url)
        .with_context(|| format!("Invalid edit base_url: {}", config.edit.base_url))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Edit base_url must use http or https: {}", config.edit.base_url);
    }

    if config.edit.environment.is_production() {
        tracing::warn!("Remote edits are disabled in the production environment");
    }

    Ok(())
}
