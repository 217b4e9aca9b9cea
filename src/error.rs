//! Error types for the data adapters

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("{status} - {body}")]
    Remote { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures detected before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::UnknownOperation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local() {
        assert!(Error::InvalidArgument("bad".into()).is_local());
        assert!(Error::UnknownOperation("nope".into()).is_local());
        assert!(!Error::Transport("reset".into()).is_local());
        assert!(!Error::Remote {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        }
        .is_local());
    }
}
