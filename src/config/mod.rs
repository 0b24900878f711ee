pub mod file_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORES_FILE: &str = "./stores.json";
pub const DEFAULT_POSTCODES_URL: &str = "https://api.postcodes.io/postcodes";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

// Lat and long cannot be retrieved for some postcodes; the agreed
// acceptable retrieval rate before we warn about the batch.
pub const DEFAULT_MIN_RESOLUTION_RATE: f64 = 0.93;

#[derive(Debug, Clone, Parser)]
#[command(name = "store-locator")]
#[command(about = "Locates retail stores near a postcode")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the stores JSON file")]
    pub stores_file: Option<String>,

    #[arg(long, help = "Bulk postcode lookup endpoint")]
    pub postcodes_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub min_resolution_rate: Option<f64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every store, sorted by name
    List,
    /// List stores within a radius of a postcode, north to south
    Nearby {
        #[arg(long)]
        postcode: String,

        #[arg(long, default_value = "10")]
        radius_km: f64,
    },
}

/// Fully resolved runtime configuration: defaults, overlaid with the
/// TOML file when one is given, overlaid with explicit CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub stores_file: String,
    pub postcodes_url: String,
    pub timeout_seconds: u64,
    pub min_resolution_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stores_file: DEFAULT_STORES_FILE.to_string(),
            postcodes_url: DEFAULT_POSTCODES_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            min_resolution_rate: DEFAULT_MIN_RESOLUTION_RATE,
        }
    }
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => file_config::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(stores_file) = &cli.stores_file {
            config.stores_file = stores_file.clone();
        }
        if let Some(postcodes_url) = &cli.postcodes_url {
            config.postcodes_url = postcodes_url.clone();
        }
        if let Some(timeout_seconds) = cli.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        if let Some(min_resolution_rate) = cli.min_resolution_rate {
            config.min_resolution_rate = min_resolution_rate;
        }

        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("stores_file", &self.stores_file)?;
        validate_url("postcodes_url", &self.postcodes_url)?;
        validate_range("min_resolution_rate", self.min_resolution_rate, 0.0, 1.0)?;
        Ok(())
    }
}
