//! mon - client-side helpers for Hasura-backed services.
//!
//! This is the umbrella crate that re-exports both helpers:
//!
//! - [`graphql`]: runs a stored GraphQL document against a Hasura-style
//!   endpoint and decodes one named field of the response (feature `graphql`)
//! - [`jwt`]: signs and verifies claim sets with a fixed 24-hour expiry
//!   (feature `jwt`)
//!
//! # Example
//!
//! ```ignore
//! use mon::graphql::{GraphQLExecutor, NO_HEADERS};
//! use mon::jwt::{Claims, JwtCodec};
//!
//! let codec = JwtCodec::new("secret", "HS256");
//! let mut claims = Claims::new();
//! claims.insert("sub".into(), "user-1".into());
//! let token = codec.encrypt(&mut claims)?;
//!
//! let mut executor = GraphQLExecutor::new(
//!     "https://hasura.example.com/v1/graphql",
//!     None,
//!     "queries/get_user.gql",
//! )?;
//! let bearer = format!("Bearer {token}");
//! let user: User = executor
//!     .set_response_key("user")
//!     .exec(&serde_json::json!({"id": 1}), [("Authorization", bearer.as_str())])
//!     .await?;
//! ```

/// GraphQL executor and HTTP transport.
#[cfg(feature = "graphql")]
pub mod graphql {
    pub use mon_net::graphql::*;
    pub use mon_net::http::{HttpClient, HttpClientBuilder};
    pub use mon_net::{Error, Result};
}

/// JSON Web Token codec.
#[cfg(feature = "jwt")]
pub mod jwt {
    pub use mon_jwt::*;
}
