//! Token encoding and decoding.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::algorithm::SigningMethod;
use crate::claims::{Claims, EXPIRY_CLAIM, issued_after, stamp_expiry};
use crate::error::{JwtError, Result};

fn default_algorithm() -> String {
    SigningMethod::Hs256.name().to_string()
}

/// Serializable codec settings, for embedding in application config.
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    /// Shared signing secret.
    pub secret: String,
    /// Algorithm name, `HS256` when omitted.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Only the field the codec checks before verification.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Encodes claims into signed tokens and decodes them back.
///
/// Every token expires 24 hours after it is issued. Decoding only accepts
/// tokens whose header names the configured algorithm.
///
/// # Example
///
/// ```ignore
/// use mon_jwt::{Claims, JwtCodec};
///
/// let codec = JwtCodec::new("secret", "HS256");
///
/// let mut claims = Claims::new();
/// claims.insert("name".into(), "john doe".into());
/// let token = codec.encrypt(&mut claims)?;
///
/// let decoded = codec.decrypt(&token)?;
/// assert_eq!(decoded["name"], "john doe");
/// ```
#[derive(Clone)]
pub struct JwtCodec {
    secret: Vec<u8>,
    algorithm: String,
}

impl JwtCodec {
    /// Create a codec from a secret and an algorithm name such as `"HS256"`.
    ///
    /// The name is resolved on each call, so an unknown name surfaces as an
    /// error from [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt).
    pub fn new(secret: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            secret: secret.into().into_bytes(),
            algorithm: algorithm.into(),
        }
    }

    /// Create a codec from deserialized settings.
    pub fn from_config(config: JwtConfig) -> Self {
        Self::new(config.secret, config.algorithm)
    }

    /// The configured algorithm name.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Resolve the configured algorithm name.
    pub fn signing_method(&self) -> Result<SigningMethod> {
        SigningMethod::from_name(&self.algorithm)
    }

    /// Stamp `exp` onto `claims` and sign them.
    ///
    /// Any existing `exp` is overwritten with now + 24 hours. `claims` is
    /// left untouched if the algorithm cannot be resolved.
    pub fn encrypt(&self, claims: &mut Claims) -> Result<String> {
        let method = self.signing_method()?;
        let expires_at = stamp_expiry(claims, Utc::now());

        let token = jsonwebtoken::encode(
            &Header::new(method.algorithm()),
            &*claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(JwtError::Signing)?;

        tracing::debug!(
            target: "mon_jwt",
            alg = method.name(),
            exp = expires_at.timestamp(),
            "Issued token"
        );
        Ok(token)
    }

    /// Verify a token and return its claims, `exp` included.
    pub fn decrypt(&self, token: &str) -> Result<Claims> {
        let method = self.signing_method()?;

        let found = header_algorithm(token)?;
        if found != method.name() {
            tracing::warn!(
                target: "mon_jwt",
                expected = method.name(),
                found = %found,
                "Rejected token with unexpected signing method"
            );
            return Err(JwtError::InvalidSigningMethod {
                expected: method.name(),
                found,
            });
        }

        let mut validation = Validation::new(method.algorithm());
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&[EXPIRY_CLAIM]);

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(JwtError::from_validation)?;

        // jsonwebtoken does not look at `iat`
        if issued_after(&data.claims, Utc::now()) {
            return Err(JwtError::IssuedInFuture);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Read the `alg` header of a compact token without verifying it.
fn header_algorithm(token: &str) -> Result<String> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(JwtError::Malformed(
            "expected three dot-separated segments".into(),
        ));
    };

    let raw = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|e| JwtError::Malformed(format!("header is not base64url: {e}")))?;
    let header: RawHeader = serde_json::from_slice(&raw)
        .map_err(|e| JwtError::Malformed(format!("header is not valid JSON: {e}")))?;
    Ok(header.alg)
}
