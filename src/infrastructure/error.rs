//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Failures talking to a Bazaar API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("cannot reach {target}")]
    Connection {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body")]
    Decode(#[source] reqwest::Error),

    #[error("cannot build request: {0}")]
    Request(String),
}

/// Result type for Bazaar API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
