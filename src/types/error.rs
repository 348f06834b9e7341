use thiserror::Error;

/// monthwise error types
#[derive(Error, Debug)]
pub enum MonthwiseError {
    /// Failed to parse a stored record or user input
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Ledger store operation failed
    #[error("store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Month outside 1-12 or malformed month key
    #[error("invalid month: {0}")]
    InvalidMonth(String),

    /// Record rejected by write-time validation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for monthwise
pub type Result<T> = std::result::Result<T, MonthwiseError>;
