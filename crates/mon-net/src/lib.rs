//! Networking module for mon.
//!
//! This crate provides the GraphQL side of mon:
//!
//! - **GraphQL Executor**: runs one stored query document against a
//!   Hasura-style endpoint and decodes a single named field of `data`
//! - **HTTP Client**: the shared `reqwest`-backed transport it sends through
//!
//! # GraphQL Executor
//!
//! ```ignore
//! use mon_net::graphql::{GraphQLExecutor, NO_HEADERS};
//!
//! let mut executor = GraphQLExecutor::new(
//!     "https://hasura.example.com/v1/graphql",
//!     Some("my-admin-secret"),
//!     "queries/get_user.gql",
//! )?;
//!
//! let user: User = executor
//!     .set_response_key("user")
//!     .exec(&serde_json::json!({"id": 1}), NO_HEADERS)
//!     .await?;
//! ```
//!
//! ## Failure modes
//!
//! Every step fails with a distinct [`Error`] variant: reading the query
//! document ([`Error::Io`]), serializing variables ([`Error::Serialize`]),
//! transport ([`Error::Timeout`], [`Error::Connection`], [`Error::Request`]),
//! a body that is not an envelope ([`Error::InvalidBody`]), a non-null
//! `errors` member ([`Error::Remote`]), and a payload that is missing or does
//! not fit the model ([`Error::ResponseShape`], [`Error::ModelMismatch`]).
//! Nothing is retried.
//!
//! ## Sharing a client
//!
//! ```ignore
//! use std::time::Duration;
//! use mon_net::http::HttpClient;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//!
//! let users = GraphQLExecutor::builder(url)
//!     .http_client(client.clone())
//!     .query_file("queries/users.gql")
//!     .build()?;
//! let orders = GraphQLExecutor::builder(url)
//!     .http_client(client)
//!     .query_file("queries/orders.gql")
//!     .build()?;
//! ```

mod error;
pub mod graphql;
pub mod http;

pub use error::{Error, Result};

// Re-export commonly used types at the crate root
pub use graphql::{
    ADMIN_SECRET_HEADER, ExecutorConfig, GraphQLExecutor, GraphQLExecutorBuilder, NO_HEADERS,
    QueryDocument, ResponseBinding, ResponseEnvelope,
};
pub use http::{HttpClient, HttpClientBuilder};
