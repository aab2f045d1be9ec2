//! Graph API request value
//!
//! A `Request` captures everything needed to produce its URL and body. It is
//! never mutated after construction: the access token is merged into a copy
//! of the parameters each time they are serialized, so `to_url()` and
//! `to_body()` can be called any number of times with the same result.

use crate::fields::param;
use crate::types::{Method, Params};
use url::form_urlencoded;

/// Production Graph API host
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Host serving the login dialog
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://www.facebook.com";

/// Graph API version used when none is configured
pub const DEFAULT_GRAPH_VERSION: &str = "v14.0";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Endpoint {
        base_url: String,
        graph_version: String,
        endpoint: String,
        params: Params,
        access_token: Option<String>,
    },
    Custom(String),
}

/// A single request to the Graph API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    target: Target,
}

impl Request {
    /// Build a request against `{graph}/{version}{endpoint}`
    ///
    /// An empty access token is treated as absent.
    pub fn new(
        method: Method,
        endpoint: impl Into<String>,
        params: Params,
        graph_version: impl Into<String>,
        access_token: Option<&str>,
    ) -> Self {
        Self {
            method,
            target: Target::Endpoint {
                base_url: DEFAULT_GRAPH_URL.to_string(),
                graph_version: graph_version.into(),
                endpoint: endpoint.into(),
                params,
                access_token: access_token
                    .filter(|token| !token.is_empty())
                    .map(str::to_string),
            },
        }
    }

    /// Build a request for an absolute URL that is sent verbatim
    pub fn custom(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            target: Target::Custom(url.into()),
        }
    }

    /// Point the request at another Graph host
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        if let Target::Endpoint { base_url, .. } = &mut self.target {
            *base_url = url.into().trim_end_matches('/').to_string();
        }
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Endpoint path, or `None` for a custom URL request
    pub fn endpoint(&self) -> Option<&str> {
        match &self.target {
            Target::Endpoint { endpoint, .. } => Some(endpoint),
            Target::Custom(_) => None,
        }
    }

    /// Caller-supplied parameters, without the access token
    pub fn params(&self) -> Option<&Params> {
        match &self.target {
            Target::Endpoint { params, .. } => Some(params),
            Target::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.target, Target::Custom(_))
    }

    /// Parameters as sent on the wire, access token last
    pub fn wire_params(&self) -> Params {
        match &self.target {
            Target::Endpoint {
                params,
                access_token,
                ..
            } => {
                let mut wire = params.clone();
                if let Some(token) = access_token {
                    wire.insert(param::ACCESS_TOKEN, token.as_str());
                }
                wire
            }
            Target::Custom(_) => Params::new(),
        }
    }

    /// Final URL for this request
    ///
    /// GET and DELETE carry the parameters in the query string; POST carries
    /// only the path. Custom URLs are returned unchanged.
    pub fn to_url(&self) -> String {
        match &self.target {
            Target::Custom(url) => url.clone(),
            Target::Endpoint {
                base_url,
                graph_version,
                endpoint,
                ..
            } => {
                let mut url = format!("{base_url}/{graph_version}{endpoint}");
                if self.method != Method::POST {
                    let wire = self.wire_params();
                    if !wire.is_empty() {
                        url.push('?');
                        url.push_str(&encode(&wire));
                    }
                }
                url
            }
        }
    }

    /// Form-encoded body; empty unless this is a POST built from params
    pub fn to_body(&self) -> String {
        if self.method == Method::POST && !self.is_custom() {
            encode(&self.wire_params())
        } else {
            String::new()
        }
    }
}

/// Builds requests that share a Graph host, API version and access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFactory {
    base_url: String,
    graph_version: String,
    access_token: Option<String>,
}

impl RequestFactory {
    pub fn new(
        base_url: impl Into<String>,
        graph_version: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            graph_version: graph_version.into(),
            access_token: access_token.filter(|token| !token.is_empty()),
        }
    }

    pub fn graph_version(&self) -> &str {
        &self.graph_version
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Build a request for `endpoint` with this factory's host, version and token
    pub fn build(&self, method: Method, endpoint: impl Into<String>, params: Params) -> Request {
        Request::new(
            method,
            endpoint,
            params,
            self.graph_version.as_str(),
            self.access_token.as_deref(),
        )
        .with_base_url(self.base_url.as_str())
    }
}

impl Default for RequestFactory {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_URL, DEFAULT_GRAPH_VERSION, None)
    }
}

/// `application/x-www-form-urlencoded` in insertion order
pub fn encode(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
