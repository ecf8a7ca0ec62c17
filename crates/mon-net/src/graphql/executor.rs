//! GraphQL executor implementation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::QueryDocument;
use super::request::{ADMIN_SECRET_HEADER, GraphQLRequest};
use super::response::ResponseEnvelope;
use crate::error::{Error, Result};
use crate::http::HttpClient;

/// Serializable executor settings, for embedding in application config.
#[derive(Clone, Deserialize)]
pub struct ExecutorConfig {
    /// GraphQL endpoint URL.
    pub url: String,
    /// Hasura admin secret. Empty or missing means none.
    #[serde(default)]
    pub admin_secret: Option<String>,
    /// Path of the query document file.
    pub query_path: PathBuf,
}

impl fmt::Debug for ExecutorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorConfig")
            .field("url", &self.url)
            .field("admin_secret", &self.admin_secret.as_ref().map(|_| "<redacted>"))
            .field("query_path", &self.query_path)
            .finish()
    }
}

enum QuerySource {
    Document(QueryDocument),
    File(PathBuf),
}

/// Builder for creating a GraphQL executor.
pub struct GraphQLExecutorBuilder {
    url: String,
    admin_secret: Option<String>,
    query: Option<QuerySource>,
    http_client: Option<HttpClient>,
}

impl GraphQLExecutorBuilder {
    /// Create a new builder with the specified GraphQL endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            admin_secret: None,
            query: None,
            http_client: None,
        }
    }

    /// Set the Hasura admin secret.
    ///
    /// Sent as `x-hasura-admin-secret` on every call. An empty secret is
    /// ignored.
    pub fn admin_secret(mut self, secret: impl Into<String>) -> Self {
        self.admin_secret = Some(secret.into());
        self
    }

    /// Use a query document that is already in memory.
    pub fn query(mut self, document: impl Into<QueryDocument>) -> Self {
        self.query = Some(QuerySource::Document(document.into()));
        self
    }

    /// Load the query document from a file when the executor is built.
    pub fn query_file(mut self, path: impl AsRef<Path>) -> Self {
        self.query = Some(QuerySource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Use an existing HTTP client.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the executor.
    ///
    /// Reads the query file now, so an unreadable file fails construction
    /// rather than the first call.
    pub fn build(self) -> Result<GraphQLExecutor> {
        let endpoint = url::Url::parse(&self.url)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "unsupported scheme '{}'",
                endpoint.scheme()
            )));
        }

        let query = match self.query.ok_or(Error::MissingQuery)? {
            QuerySource::Document(document) => document,
            QuerySource::File(path) => QueryDocument::from_file(path)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => HttpClient::builder().build()?,
        };

        Ok(GraphQLExecutor {
            inner: Arc::new(GraphQLExecutorInner {
                http_client,
                url: self.url,
                admin_secret: self.admin_secret.filter(|s| !s.is_empty()),
                query,
            }),
            response_key: None,
        })
    }
}

struct GraphQLExecutorInner {
    http_client: HttpClient,
    url: String,
    admin_secret: Option<String>,
    query: QueryDocument,
}

/// Executes one stored GraphQL document against a Hasura-style endpoint.
///
/// Each call posts `{"query", "variables"}`, fails if the response carries
/// `errors`, and decodes `data[response_key]` into the caller's model.
///
/// # Example
///
/// ```ignore
/// use mon_net::graphql::{GraphQLExecutor, NO_HEADERS};
///
/// #[derive(Default, serde::Deserialize)]
/// struct User { id: i64, name: String }
///
/// let mut executor = GraphQLExecutor::new(
///     "https://hasura.example.com/v1/graphql",
///     Some("admin-secret"),
///     "queries/get_user.gql",
/// )?;
///
/// let mut user = User::default();
/// executor
///     .set_response_key("user")
///     .set_response_model(&mut user)
///     .exec(&serde_json::json!({"id": 1}), NO_HEADERS)
///     .await?;
/// ```
///
/// Clones share configuration and HTTP client; the response key belongs to
/// each handle.
#[derive(Clone)]
pub struct GraphQLExecutor {
    inner: Arc<GraphQLExecutorInner>,
    response_key: Option<String>,
}

impl GraphQLExecutor {
    /// Create an executor, reading the query document from `query_path`.
    pub fn new(
        url: impl Into<String>,
        admin_secret: Option<&str>,
        query_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let mut builder = GraphQLExecutorBuilder::new(url).query_file(query_path);
        if let Some(secret) = admin_secret {
            builder = builder.admin_secret(secret);
        }
        builder.build()
    }

    /// Create a new builder for configuring an executor.
    pub fn builder(url: impl Into<String>) -> GraphQLExecutorBuilder {
        GraphQLExecutorBuilder::new(url)
    }

    /// Create an executor from deserialized settings.
    pub fn from_config(config: ExecutorConfig) -> Result<Self> {
        let mut builder = GraphQLExecutorBuilder::new(config.url).query_file(config.query_path);
        if let Some(secret) = config.admin_secret {
            builder = builder.admin_secret(secret);
        }
        builder.build()
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Get the query document.
    pub fn query(&self) -> &QueryDocument {
        &self.inner.query
    }

    /// Whether an admin secret is sent with each call.
    pub fn has_admin_secret(&self) -> bool {
        self.inner.admin_secret.is_some()
    }

    /// Get the current response key.
    pub fn response_key(&self) -> Option<&str> {
        self.response_key.as_deref()
    }

    /// Set which field of `data` holds the payload.
    ///
    /// e.g. for a response `{"data": {"user": {...}}}` the key is `"user"`.
    /// Without a key the whole `data` object is decoded.
    pub fn set_response_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.response_key = Some(key.into());
        self
    }

    /// Bind the model that the next call populates.
    pub fn set_response_model<'a, T>(&'a self, model: &'a mut T) -> ResponseBinding<'a, T> {
        ResponseBinding {
            executor: self,
            model,
        }
    }

    /// Execute the document and decode the payload.
    pub async fn exec<T, V, I, K, H>(&self, variables: &V, headers: I) -> Result<T>
    where
        T: DeserializeOwned,
        V: Serialize + ?Sized,
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<str>,
        H: AsRef<str>,
    {
        let payload = self.fetch_payload(variables, headers).await?;
        self.decode(payload)
    }

    /// Execute the document and decode the payload into `target`.
    ///
    /// `target` is only written when the whole call succeeds. A `null`
    /// payload, as returned by `*_by_pk` lookups that match no row, succeeds
    /// and leaves `target` as it was. Use [`exec`](Self::exec) with an
    /// `Option<T>` to tell the two cases apart.
    pub async fn exec_into<T, V, I, K, H>(
        &self,
        target: &mut T,
        variables: &V,
        headers: I,
    ) -> Result<()>
    where
        T: DeserializeOwned,
        V: Serialize + ?Sized,
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<str>,
        H: AsRef<str>,
    {
        let payload = self.fetch_payload(variables, headers).await?;
        if payload.is_null() {
            tracing::debug!(
                target: "mon_net::graphql",
                key = self.response_key.as_deref().unwrap_or("data"),
                "Null payload, model left unchanged"
            );
            return Ok(());
        }
        *target = self.decode(payload)?;
        Ok(())
    }

    fn decode<T: DeserializeOwned>(&self, payload: Value) -> Result<T> {
        serde_json::from_value(payload).map_err(|source| Error::ModelMismatch {
            key: self.response_key.clone().unwrap_or_else(|| "data".into()),
            source,
        })
    }

    async fn fetch_payload<V, I, K, H>(&self, variables: &V, headers: I) -> Result<Value>
    where
        V: Serialize + ?Sized,
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<str>,
        H: AsRef<str>,
    {
        let body = GraphQLRequest::new(self.inner.query.as_str(), variables).to_vec()?;

        let mut request = self
            .inner
            .http_client
            .post(&self.inner.url)
            .header("Content-Type", "application/json")?;
        if let Some(ref secret) = self.inner.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret)?;
        }
        // Caller headers go last so they can replace either of the above
        for (name, value) in headers {
            request = request.header(name, value)?;
        }

        let response = request.bytes(body).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            target: "mon_net::graphql",
            status,
            bytes = body.len(),
            "Received GraphQL response"
        );

        let envelope = ResponseEnvelope::from_slice(&body)
            .map_err(|source| Error::InvalidBody { status, source })?;

        envelope
            .into_payload(self.response_key.as_deref())
            .inspect_err(|err| {
                if let Error::Remote { errors } = err {
                    tracing::warn!(
                        target: "mon_net::graphql",
                        url = %self.inner.url,
                        %errors,
                        "GraphQL endpoint reported errors"
                    );
                }
            })
    }
}

impl fmt::Debug for GraphQLExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQLExecutor")
            .field("url", &self.inner.url)
            .field("has_admin_secret", &self.has_admin_secret())
            .field("response_key", &self.response_key)
            .finish()
    }
}

/// An executor paired with the model its next call populates.
///
/// Created by [`GraphQLExecutor::set_response_model`].
pub struct ResponseBinding<'a, T> {
    executor: &'a GraphQLExecutor,
    model: &'a mut T,
}

impl<T: DeserializeOwned> ResponseBinding<'_, T> {
    /// Execute the document and populate the bound model.
    ///
    /// The model is untouched if the call fails at any step or the payload
    /// is `null`.
    pub async fn exec<V, I, K, H>(self, variables: &V, headers: I) -> Result<()>
    where
        V: Serialize + ?Sized,
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<str>,
        H: AsRef<str>,
    {
        self.executor.exec_into(self.model, variables, headers).await
    }
}
