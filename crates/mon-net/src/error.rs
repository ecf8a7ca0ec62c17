//! Error types for the networking module.

use std::path::PathBuf;

use serde_json::Value;

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or executing GraphQL calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query document could not be read.
    #[error("Failed to read query document '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No query document was supplied to the builder.
    #[error("No query document configured")]
    MissingQuery,

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Invalid header name or value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Connection refused or failed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP request failed for any other transport reason.
    #[error("HTTP request error: {0}")]
    Request(String),

    /// The response body is not a GraphQL envelope.
    #[error("Invalid response body (HTTP {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope carried an `errors` member.
    ///
    /// The raw value is kept for inspection; the message stays generic.
    #[error("remote GraphQL call reported errors")]
    Remote { errors: Value },

    /// The envelope's `data` does not contain the expected payload.
    #[error("response shape mismatch: {0}")]
    ResponseShape(String),

    /// The payload could not be decoded into the response model.
    #[error("response shape mismatch: cannot decode '{key}' into response model: {source}")]
    ModelMismatch {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error for a query document path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Collect the `message` strings of a remote error list.
    ///
    /// Returns an empty vector for any other variant, or when the remote
    /// `errors` value is not a list of objects with messages.
    pub fn remote_messages(&self) -> Vec<&str> {
        match self {
            Self::Remote {
                errors: Value::Array(items),
            } => items
                .iter()
                .filter_map(|item| item.get("message").and_then(Value::as_str))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connection(_) | Self::Request(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}
