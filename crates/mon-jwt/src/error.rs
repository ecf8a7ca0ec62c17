//! JWT error types.

use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, JwtError>;

/// Errors that occur when encoding or decoding tokens.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The configured algorithm name is not a known JWS algorithm.
    #[error("Unknown signing algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// The configured algorithm is known but not a shared-secret HMAC scheme.
    #[error("Unsupported signing algorithm '{0}': only HS256, HS384 and HS512 are allowed")]
    UnsupportedAlgorithm(String),

    /// The token header names a different algorithm than the codec uses.
    #[error("invalid signing method: expected {expected}, token uses {found}")]
    InvalidSigningMethod {
        expected: &'static str,
        found: String,
    },

    /// The token is not a well-formed compact JWS.
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// The signature does not match the secret.
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// The `exp` claim is in the past.
    #[error("Token has expired")]
    Expired,

    /// The `nbf` claim is in the future.
    #[error("Token is not valid yet")]
    NotYetValid,

    /// The `iat` claim is in the future.
    #[error("Token was issued in the future")]
    IssuedInFuture,

    /// Signing failed.
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Any other claim validation failure.
    #[error("Token validation failed: {0}")]
    Validation(#[source] jsonwebtoken::errors::Error),
}

impl JwtError {
    pub(crate) fn from_validation(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::Malformed(err.to_string()),
            _ => Self::Validation(err),
        }
    }
}
