//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::{GraphClient, GraphResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::fields::param;
use crate::resources::{AccessToken, BusinessDiscovery, FacebookLogin};
use crate::types::{Direction, Params};
use anyhow::anyhow;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::LoginUrl {
                redirect_uri,
                scopes,
                state,
            } => self.login_url(&config, redirect_uri, scopes, state),
            Commands::ExchangeCode { code, redirect_uri } => {
                self.exchange_code(config, code, redirect_uri).await
            }
            Commands::LongLived { token } => self.long_lived(config, token.as_deref()).await,
            Commands::DebugToken { token } => self.debug_token(config, token.as_deref()).await,
            Commands::Get {
                endpoint,
                fields,
                params,
                pages,
            } => {
                self.get(config, endpoint, fields.as_deref(), params, *pages)
                    .await
            }
            Commands::BusinessDiscovery {
                user_id,
                username,
                pages,
            } => {
                self.business_discovery(config, user_id, username, *pages)
                    .await
            }
        }
    }

    /// Load config: inline JSON, else the config file, else defaults; env vars override
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = if let Some(json_str) = &self.cli.config_json {
            ClientConfig::from_json_str(json_str).context("Invalid config JSON")?
        } else if let Some(path) = &self.cli.config {
            ClientConfig::from_file(path)?
        } else {
            ClientConfig::default()
        };

        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn client(config: ClientConfig) -> Result<Arc<GraphClient>> {
        Ok(Arc::new(GraphClient::new(config)?))
    }

    fn login_url(
        &self,
        config: &ClientConfig,
        redirect_uri: &str,
        scopes: &str,
        state: &str,
    ) -> Result<()> {
        let login = FacebookLogin::new(config)?;
        let scopes: Vec<&str> = scopes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        println!("{}", login.login_dialog_url(redirect_uri, &scopes, state));
        Ok(())
    }

    async fn exchange_code(
        &self,
        config: ClientConfig,
        code: &str,
        redirect_uri: &str,
    ) -> Result<()> {
        let mut token = AccessToken::new(Self::client(config)?);
        let response = token.get_access_token_from_code(code, redirect_uri).await?;
        info!(long_lived = token.is_long_lived(), "Exchanged login code");
        self.output(response)
    }

    async fn long_lived(&self, config: ClientConfig, token: Option<&str>) -> Result<()> {
        let short_lived = token_or_configured(token, &config)?;
        let mut token = AccessToken::new(Self::client(config)?);
        let response = token.get_long_lived_access_token(&short_lived).await?;
        if let Some(expires_at) = token.expires_at() {
            info!("Long-lived token expires at {expires_at}");
        }
        self.output(response)
    }

    async fn debug_token(&self, config: ClientConfig, token: Option<&str>) -> Result<()> {
        let value = token_or_configured(token, &config)?;
        let token = AccessToken::new(Self::client(config)?).with_value(value);
        let response = token.debug().await?;
        self.output(response)
    }

    async fn get(
        &self,
        config: ClientConfig,
        endpoint: &str,
        fields: Option<&str>,
        raw_params: &[String],
        pages: usize,
    ) -> Result<()> {
        let mut params = Params::new();
        if let Some(fields) = fields {
            params.insert(param::FIELDS, fields);
        }
        for raw in raw_params {
            let (key, value) = parse_param(raw)?;
            params.insert(key, value);
        }

        let client = Self::client(config)?;
        let mut response = client.get(endpoint, params).await?;

        for page in 1..pages.max(1) {
            let links = response.links().clone();
            self.output(response)?;
            if !links.has_next() {
                debug!("No more pages after page {page}");
                return Ok(());
            }
            response = client.fetch_link(&links, Direction::Next).await?;
        }
        self.output(response)
    }

    async fn business_discovery(
        &self,
        config: ClientConfig,
        user_id: &str,
        username: &str,
        pages: usize,
    ) -> Result<()> {
        let discovery = BusinessDiscovery::new(Self::client(config)?, user_id, username)?;
        let mut response = discovery.get_self(Params::new()).await?;

        for page in 1..pages.max(1) {
            let links = response.links().clone();
            self.output(response)?;
            if !links.has_next() {
                debug!("No more media pages after page {page}");
                return Ok(());
            }
            response = discovery.fetch_media_link(&links, Direction::Next).await?;
        }
        self.output(response)
    }

    fn output(&self, response: GraphResponse) -> Result<()> {
        let value = Value::from(response);
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        println!("{text}");
        Ok(())
    }
}

/// Split a `key=value` argument; the value may itself contain `=`
pub fn parse_param(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("empty parameter name in '{raw}'").into());
    }
    Ok((key.to_string(), value.to_string()))
}

fn token_or_configured(token: Option<&str>, config: &ClientConfig) -> Result<String> {
    token
        .map(ToString::to_string)
        .or_else(|| config.access_token.clone())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::missing_field("access_token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["instagram-graph"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("limit=5").unwrap(),
            ("limit".to_string(), "5".to_string())
        );
        assert_eq!(
            parse_param("since=a=b").unwrap(),
            ("since".to_string(), "a=b".to_string())
        );
        assert!(parse_param("limit").is_err());
        assert!(parse_param("=5").is_err());
    }

    #[test]
    fn test_load_config_inline_json() {
        let runner = runner(&[
            "--config-json",
            r#"{"access_token": "tok", "graph_version": "v15.0"}"#,
            "get",
            "/me",
        ]);
        let config = runner.load_config().unwrap();

        assert_eq!(config.graph_version, "v15.0");
        assert!(config.access_token.is_some());
    }

    #[test]
    fn test_load_config_invalid_json() {
        let runner = runner(&["--config-json", "{nope", "get", "/me"]);
        let err = runner.load_config().unwrap_err();
        assert!(err.to_string().contains("Invalid config JSON"));
    }

    #[test]
    fn test_load_config_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "app_id: '42'\napp_secret: s").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let runner = runner(&["--config", path.as_str(), "login-url", "--redirect-uri", "https://x/cb"]);
        let config = runner.load_config().unwrap();
        assert_eq!(config.app_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_token_or_configured() {
        let config = ClientConfig::new().access_token("configured");
        assert_eq!(token_or_configured(Some("given"), &config).unwrap(), "given");
        assert_eq!(token_or_configured(None, &config).unwrap(), "configured");
        assert!(token_or_configured(None, &ClientConfig::new()).is_err());
    }

    #[tokio::test]
    async fn test_get_follows_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v14.0/me/accounts"))
            .and(query_param("after", "P2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "2"}]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v14.0/me/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "1"}],
                "paging": {"cursors": {"after": "P2"}}
            })))
            .mount(&mock_server)
            .await;

        let config =
            json!({"access_token": "tok", "graph_base_url": mock_server.uri()}).to_string();
        let runner = runner(&[
            "--config-json",
            config.as_str(),
            "get",
            "/me/accounts",
            "--param",
            "limit=1",
            "--pages",
            "3",
        ]);

        runner.run().await.unwrap();
    }
}
