use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunatoneError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Weather source unavailable: {0}")]
    WeatherSource(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LunatoneError>;
