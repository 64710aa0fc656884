use thiserror::Error;

/// Errors surfaced to the glue layer. None of them are fatal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid interval: {0:?} is not a positive number of milliseconds")]
    InvalidInterval(String),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
