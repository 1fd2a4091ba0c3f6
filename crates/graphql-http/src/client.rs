//! GraphQL HTTP client and one-shot request functions.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, IntoHeaderName};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::GraphqlClientError;
use crate::response::{GraphqlResponse, classify, decode_body};

/// Client configuration: headers plus transport overrides passed through to
/// [`reqwest`] unmodified.
#[derive(Debug, Clone, Default)]
pub struct GraphqlClientConfig {
    /// Headers applied to every request, merged over the default
    /// `Content-Type: application/json`. Configured values win on conflict.
    pub headers: HeaderMap,
    /// Per-request timeout. `None` defers to the transport's own setting.
    pub timeout: Option<Duration>,
    /// Custom transport; `None` uses a default [`reqwest::Client`].
    pub http: Option<reqwest::Client>,
}

/// Builder for [`GraphqlClient`].
#[derive(Debug, Clone)]
pub struct GraphqlClientBuilder {
    endpoint: String,
    config: GraphqlClientConfig,
}

impl GraphqlClientBuilder {
    /// Create a new builder for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            config: GraphqlClientConfig::default(),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config.headers.insert(name, value);
        self
    }

    /// Replace the full header set.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Add a bearer token authorization header.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        if let Ok(header) = HeaderValue::from_str(&value) {
            self.config
                .headers
                .insert(reqwest::header::AUTHORIZATION, header);
        }
        self
    }

    /// Set a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.config.http = Some(http);
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> GraphqlClient {
        GraphqlClient::with_config(self.endpoint, self.config)
    }
}

/// A client bound to one GraphQL endpoint.
///
/// Each request is an independent HTTP exchange; the client holds no state
/// beyond its configuration. Header setters mutate the configuration in
/// place, and every call snapshots the merged header set up front, so a
/// mutation never affects an exchange already in flight.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
    config: GraphqlClientConfig,
}

impl GraphqlClient {
    /// Create a client with default configuration.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_config(endpoint, GraphqlClientConfig::default())
    }

    /// Create a client with custom configuration.
    #[must_use]
    pub fn with_config(endpoint: impl Into<String>, config: GraphqlClientConfig) -> Self {
        let http = config.http.clone().unwrap_or_default();
        Self {
            endpoint: endpoint.into(),
            http,
            config,
        }
    }

    /// Target endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Currently configured headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.config.headers
    }

    /// Replace the entire header set.
    pub fn set_headers(&mut self, headers: HeaderMap) -> &mut Self {
        self.config.headers = headers;
        self
    }

    /// Set a single header, keeping the others.
    pub fn set_header<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) -> &mut Self {
        self.config.headers.insert(name, value);
        self
    }

    /// Issue a query and return only the `data` field, deserialized into `T`.
    ///
    /// Failures propagate exactly as from [`raw_request`](Self::raw_request).
    pub async fn request<V, T>(
        &self,
        query: &str,
        variables: Option<V>,
    ) -> Result<T, GraphqlClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self.raw_request(query, variables).await?;
        Ok(serde_json::from_value(response.data)?)
    }

    /// Issue a query and return the full response envelope.
    pub async fn raw_request<V>(
        &self,
        query: &str,
        variables: Option<V>,
    ) -> Result<GraphqlResponse, GraphqlClientError>
    where
        V: Serialize,
    {
        let body = serde_json::to_string(&RequestBody {
            query,
            variables: variables.as_ref(),
        })?;
        self.raw_string_request(body).await
    }

    /// Send a pre-serialized body and return only the `data` field.
    ///
    /// For callers that assemble their own wire payload, e.g. to add fields
    /// outside the query/variables shape.
    pub async fn string_request<T>(&self, body: impl Into<String>) -> Result<T, GraphqlClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.raw_string_request(body).await?;
        Ok(serde_json::from_value(response.data)?)
    }

    /// Send a pre-serialized body verbatim and return the full envelope.
    ///
    /// The body is posted with `Content-Type: application/json` unless the
    /// configured headers override it.
    pub async fn raw_string_request(
        &self,
        body: impl Into<String>,
    ) -> Result<GraphqlResponse, GraphqlClientError> {
        let body = body.into();
        let headers = self.merged_headers();

        debug!(endpoint = %self.endpoint, body_bytes = body.len(), "sending graphql request");

        let mut request = self
            .http
            .post(&self.endpoint)
            .headers(headers)
            .body(body.clone());
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let decoded = decode_body(response).await?;

        debug!(status = status.as_u16(), "classifying graphql response");

        classify(status, response_headers, decoded, &body).map_err(GraphqlClientError::Response)
    }

    /// Default content type merged under the configured headers.
    fn merged_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(self.config.headers.len() + 1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &self.config.headers {
            headers.insert(name, value.clone());
        }
        headers
    }
}

/// Wire body for structured requests; `variables` is omitted when absent.
#[derive(Serialize)]
struct RequestBody<'a, V> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a V>,
}

/// One-shot [`GraphqlClient::request`] against `url`.
pub async fn request<V, T>(
    url: &str,
    query: &str,
    variables: Option<V>,
    config: GraphqlClientConfig,
) -> Result<T, GraphqlClientError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    GraphqlClient::with_config(url, config)
        .request(query, variables)
        .await
}

/// One-shot [`GraphqlClient::raw_request`] against `url`.
pub async fn raw_request<V>(
    url: &str,
    query: &str,
    variables: Option<V>,
    config: GraphqlClientConfig,
) -> Result<GraphqlResponse, GraphqlClientError>
where
    V: Serialize,
{
    GraphqlClient::with_config(url, config)
        .raw_request(query, variables)
        .await
}

/// One-shot [`GraphqlClient::string_request`] against `url`.
pub async fn string_request<T>(
    url: &str,
    body: impl Into<String>,
    config: GraphqlClientConfig,
) -> Result<T, GraphqlClientError>
where
    T: DeserializeOwned,
{
    GraphqlClient::with_config(url, config)
        .string_request(body)
        .await
}

/// One-shot [`GraphqlClient::raw_string_request`] against `url`.
pub async fn raw_string_request(
    url: &str,
    body: impl Into<String>,
    config: GraphqlClientConfig,
) -> Result<GraphqlResponse, GraphqlClientError> {
    GraphqlClient::with_config(url, config)
        .raw_string_request(body)
        .await
}
