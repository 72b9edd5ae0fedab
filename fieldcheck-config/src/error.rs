// Error types for constants loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load constants: {0}")]
    LoadError(String),

    #[error("Failed to parse constants: {0}")]
    ParseError(String),

    #[error("Invalid pattern `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid limit `{0}`")]
    InvalidLimit(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
