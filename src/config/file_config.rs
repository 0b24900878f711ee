use crate::config::AppConfig;
use crate::utils::error::Result;
use serde::Deserialize;
use std::fs;

/// Optional TOML configuration file. Every field falls back to the
/// built-in default when absent, so a file only needs to mention the
/// knobs it wants to change:
///
/// ```toml
/// stores_file = "./stores.json"
///
/// [resolver]
/// endpoint = "https://api.postcodes.io/postcodes"
/// timeout_seconds = 10
/// min_resolution_rate = 0.93
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub stores_file: Option<String>,
    pub resolver: Option<ResolverSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub min_resolution_rate: Option<f64>,
}

pub fn load(path: &str) -> Result<AppConfig> {
    tracing::debug!("Loading config file: {}", path);
    let content = fs::read_to_string(path)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = AppConfig::default();
    if let Some(stores_file) = file_config.stores_file {
        config.stores_file = stores_file;
    }
    if let Some(resolver) = file_config.resolver {
        if let Some(endpoint) = resolver.endpoint {
            config.postcodes_url = endpoint;
        }
        if let Some(timeout_seconds) = resolver.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        if let Some(min_resolution_rate) = resolver.min_resolution_rate {
            config.min_resolution_rate = min_resolution_rate;
        }
    }

    Ok(config)
}
