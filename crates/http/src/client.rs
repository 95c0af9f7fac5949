//! reqwest-backed transport and its builder

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use uuid::{Timestamp, Uuid};

use shelf_kernel::ApiSettings;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builder for constructing the backend transport
pub struct TransportBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    request_ids: bool,
}

impl TransportBuilder {
    /// Create a new builder for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
            request_ids: false,
        }
    }

    /// Apply the timeout, user agent and request ids from settings
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(&settings.base_url)
            .with_timeout(settings.request_timeout_ms)
            .with_user_agent(&settings.user_agent)
            .with_request_id()
    }

    /// Add a whole-request timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(Duration::from_millis(timeout_ms));
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Tag every request with a time-ordered `x-request-id`
    pub fn with_request_id(mut self) -> Self {
        self.request_ids = true;
        self
    }

    /// Build the final transport
    pub fn build(self) -> anyhow::Result<ReqwestTransport> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder
            .build()
            .context("failed to build HTTP client")?;

        Ok(ReqwestTransport {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            request_ids: self.request_ids,
        })
    }
}

/// [`Transport`] over a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    request_ids: bool,
}

impl ReqwestTransport {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if self.request_ids {
            builder = builder.header(REQUEST_ID_HEADER, make_request_id());
        }

        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(method = request.method.as_str(), %url, status, "response received");

        Ok(ApiResponse { status, body })
    }
}

fn make_request_id() -> String {
    let timestamp = Timestamp::now(uuid::NoContext);
    Uuid::new_v7(timestamp).to_string()
}
