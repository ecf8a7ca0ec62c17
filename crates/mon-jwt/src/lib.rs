//! JSON Web Token helper for mon.
//!
//! [`JwtCodec`] signs an open claim set with a shared secret and one of the
//! HMAC algorithms (`HS256`, `HS384`, `HS512`). Every issued token carries an
//! `exp` claim 24 hours in the future.
//!
//! Decoding checks, in order:
//! 1. the token has three segments and a readable header
//! 2. the header's `alg` equals the configured algorithm, so a token re-labelled
//!    `none` or with an asymmetric scheme is rejected before any key is used
//! 3. the signature matches the secret
//! 4. `exp` is present and in the future (and `nbf`, when present, has passed)
//! 5. `iat`, when present, is not in the future
//!
//! # Example
//!
//! ```ignore
//! use mon_jwt::{Claims, JwtCodec, JwtError};
//!
//! let codec = JwtCodec::new("secret", "HS256");
//!
//! let mut claims = Claims::new();
//! claims.insert("name".into(), "john doe".into());
//! let token = codec.encrypt(&mut claims)?;
//!
//! let decoded = codec.decrypt(&token)?;
//! assert_eq!(decoded["name"], "john doe");
//!
//! let other = JwtCodec::new("secret", "HS512");
//! assert!(matches!(
//!     other.decrypt(&token),
//!     Err(JwtError::InvalidSigningMethod { .. })
//! ));
//! ```

mod algorithm;
mod claims;
mod codec;
mod error;

pub use algorithm::SigningMethod;
pub use claims::{Claims, EXPIRY_CLAIM, ISSUED_AT_CLAIM, TOKEN_TTL_SECS, expiry_of, token_ttl};
pub use codec::{JwtCodec, JwtConfig};
pub use error::{JwtError, Result};
