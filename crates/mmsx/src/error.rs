use std::error::Error as StdError;

/// Errors reported by a protocol engine.
///
/// The session passes these through untouched, so callers see exactly what
/// the active engine produced.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Operation not supported by this engine: {0}")]
    Unsupported(&'static str),

    #[error("Engine error: {0}")]
    Other(Box<dyn StdError + Send + Sync>),
}

/// Errors originating in the session itself.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Neither engine could connect to the URL. Per-engine reasons are only
    /// visible in the connect trace.
    #[error("Failed to connect to {url} with any protocol")]
    ConnectFailed { url: String },
}
