use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Coordinate resolution request failed: {0}")]
    ResolverError(#[from] reqwest::Error),

    #[error("Coordinate resolver returned status {status}")]
    ResolverStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid radius: {radius_km} km (radius cannot be negative)")]
    InvalidRadiusError { radius_km: f64 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LocatorError>;
