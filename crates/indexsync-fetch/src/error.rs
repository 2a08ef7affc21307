//! Error types for indexsync-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed transport error, kept intact so callers can walk the source chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("output file must be a JSON file: {}", .path.display())]
    InvalidExtension { path: PathBuf },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[source] BoxError),

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    pub(crate) fn network<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FetchError::Network(Box::new(err))
    }

    /// Returns the HTTP status code if the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
