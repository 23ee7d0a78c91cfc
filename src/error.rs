use thiserror::Error;

/// Top-level error type for OHCE.
#[derive(Debug, Error)]
pub enum OhceError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error on the console streams.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
