//! Client configuration
//!
//! `ClientConfig` enumerates every key the client understands. It can be
//! built in code, loaded from a JSON or YAML file, and overridden from the
//! environment. `validate()` runs when a client is constructed so bad
//! values fail before any request is sent.

use crate::error::{Error, Result};
use crate::http::{
    HttpTransportConfig, RequestFactory, DEFAULT_AUTHORIZATION_URL, DEFAULT_GRAPH_URL,
    DEFAULT_GRAPH_VERSION,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Env var overriding `access_token`
pub const ENV_ACCESS_TOKEN: &str = "INSTAGRAM_ACCESS_TOKEN";
/// Env var overriding `app_id`
pub const ENV_APP_ID: &str = "INSTAGRAM_APP_ID";
/// Env var overriding `app_secret`
pub const ENV_APP_SECRET: &str = "INSTAGRAM_APP_SECRET";
/// Env var overriding `graph_version`
pub const ENV_GRAPH_VERSION: &str = "INSTAGRAM_GRAPH_VERSION";

/// Configuration shared by every resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Token sent as `access_token` with every request
    #[serde(default)]
    pub access_token: Option<String>,

    /// Facebook application id (token exchange and login dialog)
    #[serde(default)]
    pub app_id: Option<String>,

    /// Facebook application secret (token exchange)
    #[serde(default)]
    pub app_secret: Option<String>,

    /// Graph API version, e.g. `v14.0`
    #[serde(default = "default_graph_version")]
    pub graph_version: String,

    /// Graph API host
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,

    /// Host serving the login dialog
    #[serde(default = "default_authorization_base_url")]
    pub authorization_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_graph_version() -> String {
    DEFAULT_GRAPH_VERSION.to_string()
}

fn default_graph_base_url() -> String {
    DEFAULT_GRAPH_URL.to_string()
}

fn default_authorization_base_url() -> String {
    DEFAULT_AUTHORIZATION_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            app_id: None,
            app_secret: None,
            graph_version: default_graph_version(),
            graph_base_url: default_graph_base_url(),
            authorization_base_url: default_authorization_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access token
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the application id and secret
    #[must_use]
    pub fn app(mut self, app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Set the Graph API version
    #[must_use]
    pub fn graph_version(mut self, version: impl Into<String>) -> Self {
        self.graph_version = version.into();
        self
    }

    /// Set the Graph API host
    #[must_use]
    pub fn graph_base_url(mut self, url: impl Into<String>) -> Self {
        self.graph_base_url = url.into();
        self
    }

    /// Set the login dialog host
    #[must_use]
    pub fn authorization_base_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Parse a JSON config
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML config
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file; `.yaml` / `.yml` are read as YAML, anything else as JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Override values from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Override values from a key lookup (env-style names)
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(app_id) = get(ENV_APP_ID) {
            self.app_id = Some(app_id);
        }
        if let Some(secret) = get(ENV_APP_SECRET) {
            self.app_secret = Some(secret);
        }
        if let Some(version) = get(ENV_GRAPH_VERSION) {
            self.graph_version = version;
        }
        self
    }

    /// Check every value the client relies on
    pub fn validate(&self) -> Result<()> {
        if self.graph_version.is_empty() {
            return Err(Error::missing_field("graph_version"));
        }
        if !self.graph_version.starts_with('v') {
            return Err(Error::invalid_value(
                "graph_version",
                format!("expected a version like 'v14.0', got '{}'", self.graph_version),
            ));
        }
        for (field, value) in [
            ("graph_base_url", &self.graph_base_url),
            ("authorization_base_url", &self.authorization_base_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| Error::invalid_value(field, e.to_string()))?;
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Application id and secret, failing when either is missing
    pub fn app_credentials(&self) -> Result<(&str, &str)> {
        let app_id = non_empty(self.app_id.as_deref()).ok_or_else(|| Error::missing_field("app_id"))?;
        let app_secret =
            non_empty(self.app_secret.as_deref()).ok_or_else(|| Error::missing_field("app_secret"))?;
        Ok((app_id, app_secret))
    }

    /// Transport settings derived from this config
    pub fn transport_config(&self) -> HttpTransportConfig {
        let mut builder =
            HttpTransportConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        builder.build()
    }

    /// Request factory sharing this config's host, version and token
    pub fn request_factory(&self) -> RequestFactory {
        RequestFactory::new(
            self.graph_base_url.trim_end_matches('/'),
            self.graph_version.as_str(),
            self.access_token.clone(),
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.graph_version, "v14.0");
        assert_eq!(config.graph_base_url, "https://graph.facebook.com");
        assert_eq!(config.authorization_base_url, "https://www.facebook.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.access_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ClientConfig::from_json_str(r#"{"access_token": "tok"}"#).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.graph_version, "v14.0");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ClientConfig::from_json_str(r#"{"acces_token": "tok"}"#).is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "access_token: tok\ngraph_version: v15.0\napp_id: '42'").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.graph_version, "v15.0");
        assert_eq!(config.app_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"app_id": "1", "app_secret": "s"}}"#).unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.app_credentials().unwrap(), ("1", "s"));
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_ACCESS_TOKEN, "env-token"),
            (ENV_GRAPH_VERSION, "v16.0"),
            (ENV_APP_ID, ""),
        ]);
        let config = ClientConfig::new()
            .app("file-app", "file-secret")
            .with_overrides_from(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.access_token.as_deref(), Some("env-token"));
        assert_eq!(config.graph_version, "v16.0");
        assert_eq!(config.app_id.as_deref(), Some("file-app"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = ClientConfig::new().graph_version("14.0").validate().unwrap_err();
        assert!(err.to_string().contains("graph_version"));

        let err = ClientConfig::new().graph_version("").validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));

        let err = ClientConfig::new()
            .graph_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("graph_base_url"));

        assert!(ClientConfig::new().timeout_secs(0).validate().is_err());
    }

    #[test]
    fn test_app_credentials_required() {
        let err = ClientConfig::new().app_credentials().unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: app_id");

        let mut config = ClientConfig::new().app("1", "");
        assert!(config.app_credentials().is_err());
        config.app_secret = Some("s".to_string());
        assert!(config.app_credentials().is_ok());
    }

    #[test]
    fn test_request_factory_from_config() {
        let config = ClientConfig::new()
            .access_token("tok")
            .graph_base_url("http://localhost:1234/")
            .graph_version("v15.0");
        let factory = config.request_factory();

        assert_eq!(factory.graph_version(), "v15.0");
        assert_eq!(factory.access_token(), Some("tok"));
    }
}
