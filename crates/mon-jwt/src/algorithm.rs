//! Signing algorithm selection.

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::error::{JwtError, Result};

/// A shared-secret signing method.
///
/// Named the way they appear in the token header's `alg` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningMethod {
    /// HMAC using SHA-256.
    Hs256,
    /// HMAC using SHA-384.
    Hs384,
    /// HMAC using SHA-512.
    Hs512,
}

impl SigningMethod {
    /// Resolve a method from its `alg` name, e.g. `"HS256"`.
    ///
    /// Names are case-sensitive. Asymmetric algorithms are rejected since the
    /// codec only holds a shared secret.
    pub fn from_name(name: &str) -> Result<Self> {
        let algorithm =
            Algorithm::from_str(name).map_err(|_| JwtError::UnknownAlgorithm(name.to_string()))?;
        match algorithm {
            Algorithm::HS256 => Ok(Self::Hs256),
            Algorithm::HS384 => Ok(Self::Hs384),
            Algorithm::HS512 => Ok(Self::Hs512),
            _ => Err(JwtError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// The `alg` header value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }

    pub(crate) fn algorithm(self) -> Algorithm {
        match self {
            Self::Hs256 => Algorithm::HS256,
            Self::Hs384 => Algorithm::HS384,
            Self::Hs512 => Algorithm::HS512,
        }
    }
}

impl FromStr for SigningMethod {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
