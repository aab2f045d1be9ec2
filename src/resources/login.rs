//! Facebook login dialog URL

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::fields::{join, param, response_type};
use crate::http::encode;
use crate::types::Params;

const ENDPOINT: &str = "dialog/oauth";

/// Builds the OAuth dialog URL users are sent to; no request is made
#[derive(Debug, Clone)]
pub struct FacebookLogin {
    app_id: String,
    authorization_base_url: String,
    graph_version: String,
}

impl FacebookLogin {
    /// Fails when `app_id` is not configured
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let app_id = config
            .app_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::missing_field("app_id"))?;

        Ok(Self {
            app_id,
            authorization_base_url: config.authorization_base_url.trim_end_matches('/').to_string(),
            graph_version: config.graph_version.clone(),
        })
    }

    /// `{auth host}/{version}/dialog/oauth?client_id&redirect_uri&state&scope&response_type=code`
    pub fn login_dialog_url<S: AsRef<str>>(
        &self,
        redirect_uri: &str,
        scopes: &[S],
        state: &str,
    ) -> String {
        let params = Params::new()
            .with(param::CLIENT_ID, self.app_id.as_str())
            .with(param::REDIRECT_URI, redirect_uri)
            .with(param::STATE, state)
            .with(param::SCOPE, join(scopes))
            .with(param::RESPONSE_TYPE, response_type::CODE);

        format!(
            "{}/{}/{ENDPOINT}?{}",
            self.authorization_base_url,
            self.graph_version,
            encode(&params)
        )
    }
}
