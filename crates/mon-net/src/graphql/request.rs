//! GraphQL request body.

use serde::Serialize;

use crate::error::{Error, Result};

/// Header carrying the Hasura admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// An empty caller header set.
pub const NO_HEADERS: [(&str, &str); 0] = [];

/// The JSON body of a GraphQL call: `{"query": ..., "variables": ...}`.
///
/// Borrows both parts; variables may be any serializable value, including
/// `()` or `None` for `null`.
#[derive(Serialize)]
pub struct GraphQLRequest<'a, V: ?Sized> {
    /// The GraphQL operation text.
    pub query: &'a str,
    /// Operation variables.
    pub variables: &'a V,
}

impl<'a, V: Serialize + ?Sized> GraphQLRequest<'a, V> {
    /// Create a request body.
    pub fn new(query: &'a str, variables: &'a V) -> Self {
        Self { query, variables }
    }

    /// Serialize to JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Serialize)
    }
}
