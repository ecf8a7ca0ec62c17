//! Claims mapping and expiry helpers.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

/// An open claim set: string keys to arbitrary JSON values.
pub type Claims = serde_json::Map<String, Value>;

/// The reserved expiration claim, a Unix timestamp in seconds.
pub const EXPIRY_CLAIM: &str = "exp";

/// Lifetime of every issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Lifetime of every issued token.
pub fn token_ttl() -> TimeDelta {
    TimeDelta::seconds(TOKEN_TTL_SECS)
}

/// Read the `exp` claim as a UTC timestamp.
///
/// Returns `None` when the claim is absent or not a number.
pub fn expiry_of(claims: &Claims) -> Option<DateTime<Utc>> {
    let exp = claims.get(EXPIRY_CLAIM)?;
    let secs = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
    DateTime::from_timestamp(secs, 0)
}

/// The reserved issued-at claim, a Unix timestamp in seconds.
pub const ISSUED_AT_CLAIM: &str = "iat";

/// Whether a numeric `iat` claim lies after `now`. Non-numeric values are
/// ignored.
pub(crate) fn issued_after(claims: &Claims, now: DateTime<Utc>) -> bool {
    let Some(iat) = claims.get(ISSUED_AT_CLAIM) else {
        return false;
    };
    iat.as_i64()
        .or_else(|| iat.as_f64().map(|f| f as i64))
        .is_some_and(|secs| secs > now.timestamp())
}

pub(crate) fn stamp_expiry(claims: &mut Claims, now: DateTime<Utc>) -> DateTime<Utc> {
    let expires_at = now + token_ttl();
    claims.insert(EXPIRY_CLAIM.to_string(), Value::from(expires_at.timestamp()));
    expires_at
}
