//! Shared reqwest client used by the executor.

use std::time::Duration;

use super::request::HttpRequestBuilder;
use crate::error::Result;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an [`HttpClient`].
///
/// Defaults to a 30 second request timeout, a 10 second connect timeout and
/// a `mon-net/<version>` user agent.
#[derive(Clone, Debug)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: concat!("mon-net/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientBuilder {
    /// Bound each call, from connect to last body byte.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Let calls run as long as the server keeps the connection open.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpClient {
            client: builder.build()?,
            timeout: self.timeout,
            user_agent: self.user_agent,
        })
    }
}

/// Connection pool shared by every executor holding a clone.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
    user_agent: String,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// The per-call timeout, `None` when unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Start a POST to `url`.
    pub fn post(&self, url: impl AsRef<str>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(self.clone(), reqwest::Method::POST, url.as_ref().to_string())
    }

    pub(crate) fn reqwest_client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
