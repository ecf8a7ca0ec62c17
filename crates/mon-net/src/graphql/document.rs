//! Query documents.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// The GraphQL operation text sent with every call.
///
/// Loaded once, then shared read-only by every clone of the executor.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryDocument {
    text: Arc<str>,
}

impl QueryDocument {
    /// Create a document from literal operation text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::from(text.into()),
        }
    }

    /// Read a document from a `.graphql` / `.gql` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(
            target: "mon_net::graphql",
            path = %path.display(),
            bytes = text.len(),
            "Loaded query document"
        );
        Ok(Self::new(text))
    }

    /// The operation text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for QueryDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for QueryDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDocument")
            .field("len", &self.text.len())
            .finish()
    }
}

impl fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
