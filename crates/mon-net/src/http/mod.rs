//! HTTP transport for mon.
//!
//! A thin layer over a shared `reqwest` client. The GraphQL executor sends
//! through it; it is public so one client can be shared between executors.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use mon_net::http::HttpClient;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let response = client
//!     .post("https://hasura.example.com/v1/graphql")
//!     .header("Content-Type", "application/json")?
//!     .bytes(r#"{"query":"{ users { id } }"}"#)
//!     .send()
//!     .await?;
//! println!("Status: {}", response.status());
//! ```

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
