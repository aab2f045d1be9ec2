//! Transport: puts a `Request` on the wire and decodes the reply
//!
//! The transport is the only component that talks to the network. It makes
//! exactly one attempt per call; there is no retry, backoff or rate limiting
//! at this layer. Non-2xx replies are not errors: the Graph API describes
//! failures in an `error` object in the body, which is surfaced as-is.

use super::request::Request;
use crate::error::Result;
use crate::types::{JsonObject, JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Executes requests against the Graph API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the decoded JSON object
    ///
    /// Fails only on network or protocol errors. A body that is not a JSON
    /// object decodes to an empty object.
    async fn send(&self, request: &Request) -> Result<JsonObject>;
}

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("instagram-graph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<JsonObject> {
        let method = request.method();
        let mut req = self.client.request(method.into(), request.to_url());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if method == Method::POST {
            req = req
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.to_body());
        }

        debug!(
            "Sending {} {}",
            method,
            request.endpoint().unwrap_or("<custom url>")
        );

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Graph API answered {} for {}", status.as_u16(), method);
        }

        Ok(decode_body(&body))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decode a response body, falling back to an empty object
pub fn decode_body(body: &str) -> JsonObject {
    match serde_json::from_str::<JsonValue>(body) {
        Ok(JsonValue::Object(map)) => map,
        Ok(_) => {
            debug!("Response body is not a JSON object");
            JsonObject::new()
        }
        Err(e) => {
            debug!("Response body is not valid JSON: {e}");
            JsonObject::new()
        }
    }
}
