//! Error types for IPRS

use thiserror::Error;

/// Result type alias for IPRS operations
pub type Result<T> = std::result::Result<T, IprsError>;

/// Main error type for IPRS
#[derive(Error, Debug)]
pub enum IprsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
