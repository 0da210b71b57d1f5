//! Error types for the dispatcher

use thiserror::Error;

/// Result type alias for the dispatcher
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Main error type for the dispatcher
///
/// `Config`, `Fetch` and `Parsing` are fatal to a run. `Send` is recorded
/// against the row that produced it and the batch carries on.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sheet retrieval errors
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// CSV parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Transport send errors
    #[error("Send error: {0}")]
    Send(String),

    /// State file errors
    #[error("State error: {0}")]
    State(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
