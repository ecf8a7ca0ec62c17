//! GraphQL executor for Hasura-style endpoints.
//!
//! This module provides an executor that:
//! - Loads one query document at construction (file or literal)
//! - Posts `{"query", "variables"}` with an optional `x-hasura-admin-secret`
//! - Treats any non-null `errors` member as failure
//! - Decodes one named field of `data` into a caller-supplied model
//!
//! # Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use mon_net::graphql::GraphQLExecutor;
//!
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! let mut executor = GraphQLExecutor::builder("https://hasura.example.com/v1/graphql")
//!     .admin_secret("my-admin-secret")
//!     .query_file("queries/get_user.gql")
//!     .build()?;
//!
//! // Per-call headers are applied last and win over the defaults
//! let mut headers = HashMap::new();
//! headers.insert("x-hasura-role".to_string(), "user".to_string());
//!
//! let mut user = User::default();
//! executor
//!     .set_response_key("user")
//!     .set_response_model(&mut user)
//!     .exec(&serde_json::json!({"id": 1}), &headers)
//!     .await?;
//!
//! // Or decode by value
//! let user: User = executor.exec(&serde_json::json!({"id": 1}), &headers).await?;
//! ```

mod document;
mod executor;
mod request;
mod response;

pub use document::QueryDocument;
pub use executor::{ExecutorConfig, GraphQLExecutor, GraphQLExecutorBuilder, ResponseBinding};
pub use request::{ADMIN_SECRET_HEADER, GraphQLRequest, NO_HEADERS};
pub use response::ResponseEnvelope;
