//! HTTP request types and builder.

use bytes::Bytes;

use super::client::HttpClient;
use super::response::HttpResponse;
use crate::error::Result;

/// A built HTTP request ready to be sent.
#[derive(Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: reqwest::Method,
    /// The request URL.
    pub url: String,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Option<Bytes>,
}

/// Builder for constructing HTTP requests.
///
/// Headers use replace semantics: setting a header that is already present
/// (names compare case-insensitively) overwrites the earlier value.
pub struct HttpRequestBuilder {
    client: HttpClient,
    method: reqwest::Method,
    url: String,
    headers: http::HeaderMap,
    body: Option<Bytes>,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, method: reqwest::Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value under the same name.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = http::HeaderName::from_bytes(name.as_ref().as_bytes())?;
        let value = http::HeaderValue::from_str(value.as_ref())?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set a raw binary body.
    pub fn bytes(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the request without sending it.
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }

    /// Send the request and wait for the response.
    pub async fn send(self) -> Result<HttpResponse> {
        let client = self.client.clone();
        let request = self.build();

        let url = url::Url::parse(&request.url)?;

        tracing::debug!(
            target: "mon_net::http",
            method = %request.method,
            url = %url,
            "Sending request"
        );

        let mut req_builder = client
            .reqwest_client()
            .request(request.method, url)
            .headers(request.headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;
        Ok(HttpResponse::from_reqwest(response))
    }
}
