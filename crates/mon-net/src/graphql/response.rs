//! GraphQL response envelope.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// The `{data, errors}` wrapper around every GraphQL response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    /// The data returned by the operation.
    #[serde(default)]
    pub data: Option<Value>,

    /// Errors reported by the server. Any non-null value counts.
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ResponseEnvelope {
    /// Parse an envelope from a response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Check if the server reported errors.
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    /// Extract the payload stored under `key` in `data`.
    ///
    /// With no key, the whole `data` object is the payload. Fails with
    /// [`Error::Remote`] whenever `errors` is present, even alongside data.
    pub fn into_payload(self, key: Option<&str>) -> Result<Value> {
        if let Some(errors) = self.errors {
            return Err(Error::Remote { errors });
        }

        let mut data = match self.data {
            Some(Value::Object(data)) => data,
            Some(other) => {
                return Err(Error::ResponseShape(format!(
                    "expected 'data' to be an object, got {}",
                    json_kind(&other)
                )));
            }
            None => return Err(Error::ResponseShape("response has no 'data'".into())),
        };

        match key {
            Some(key) => data.remove(key).ok_or_else(|| {
                Error::ResponseShape(format!("key '{key}' not found in response data"))
            }),
            None => Ok(Value::Object(data)),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
