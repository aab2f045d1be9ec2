//! Access token exchange, inspection and permissions

use super::require;
use crate::client::{GraphClient, GraphResponse};
use crate::error::{Error, Result};
use crate::fields::{grant_type, param};
use crate::types::{JsonObject, JsonValue, Params};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

const ENDPOINT_DEBUG: &str = "/debug_token";
const ENDPOINT_TOKEN: &str = "/oauth/access_token";
const ENDPOINT_PERMISSIONS: &str = "permissions";

/// Tokens expiring later than this are long-lived
const LONG_LIVED_THRESHOLD_SECS: i64 = 2 * 60 * 60;

/// A user access token and its expiry
///
/// Exchanges update the held value and expiry from the response, so one
/// instance can go code -> short-lived -> long-lived.
#[derive(Clone)]
pub struct AccessToken {
    client: Arc<GraphClient>,
    value: String,
    expires_at: Option<DateTime<Utc>>,
    user_id: Option<String>,
}

impl AccessToken {
    /// Token initialised from the client's configured `access_token`
    pub fn new(client: Arc<GraphClient>) -> Self {
        let value = client.config().access_token.clone().unwrap_or_default();
        Self {
            client,
            value,
            expires_at: None,
            user_id: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// User whose permissions are read or revoked
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Inspect the held token via `/debug_token`
    pub async fn debug(&self) -> Result<GraphResponse> {
        let params = Params::new().with(param::INPUT_TOKEN, self.value.as_str());
        self.client.get(ENDPOINT_DEBUG, params).await
    }

    /// Exchange a login dialog `code` for a token
    pub async fn get_access_token_from_code(
        &mut self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GraphResponse> {
        let (app_id, app_secret) = self.client.config().app_credentials()?;
        let params = Params::new()
            .with(param::CLIENT_ID, app_id)
            .with(param::CLIENT_SECRET, app_secret)
            .with(param::REDIRECT_URI, redirect_uri)
            .with(param::CODE, require("code", code)?);

        let response = self.client.get(ENDPOINT_TOKEN, params).await?;
        self.set_data_from_response(response.body());
        Ok(response)
    }

    /// Exchange a short-lived token for a long-lived one
    pub async fn get_long_lived_access_token(
        &mut self,
        access_token: &str,
    ) -> Result<GraphResponse> {
        let (app_id, app_secret) = self.client.config().app_credentials()?;
        let params = Params::new()
            .with(param::CLIENT_ID, app_id)
            .with(param::CLIENT_SECRET, app_secret)
            .with(param::FB_EXCHANGE_TOKEN, require("access_token", access_token)?)
            .with(param::GRANT_TYPE, grant_type::FB_EXCHANGE_TOKEN);

        let response = self.client.get(ENDPOINT_TOKEN, params).await?;
        self.set_data_from_response(response.body());
        Ok(response)
    }

    /// Permissions granted by the user
    pub async fn get_permissions(&self) -> Result<GraphResponse> {
        let endpoint = format!("/{}/{ENDPOINT_PERMISSIONS}", self.user_id()?);
        self.client.get(&endpoint, Params::new()).await
    }

    /// Revoke one permission, or all of them when `permission` is `None`
    pub async fn revoke_permissions(&self, permission: Option<&str>) -> Result<GraphResponse> {
        let mut endpoint = format!("/{}/{ENDPOINT_PERMISSIONS}", self.user_id()?);
        if let Some(name) = permission.filter(|p| !p.is_empty()) {
            endpoint.push('/');
            endpoint.push_str(name);
        }
        self.client.delete(&endpoint, Params::new()).await
    }

    /// Whether the token outlives the next two hours
    pub fn is_long_lived(&self) -> bool {
        self.is_long_lived_at(Utc::now())
    }

    /// `is_long_lived` against a fixed clock; a token without expiry never expires
    pub fn is_long_lived_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > now + Duration::seconds(LONG_LIVED_THRESHOLD_SECS),
            None => true,
        }
    }

    /// Take `access_token` and `expires_in` from a token response
    ///
    /// Responses without `access_token` (errors included) leave the token
    /// untouched. A missing `expires_in` clears the expiry.
    pub fn set_data_from_response(&mut self, body: &JsonObject) {
        self.set_data_from_response_at(body, Utc::now());
    }

    fn set_data_from_response_at(&mut self, body: &JsonObject, now: DateTime<Utc>) {
        let Some(value) = body.get(param::ACCESS_TOKEN).and_then(JsonValue::as_str) else {
            debug!("Token response carries no access_token");
            return;
        };
        self.value = value.to_string();
        self.expires_at = body
            .get("expires_in")
            .and_then(expires_in_secs)
            .and_then(|secs| expiry_after(now, secs));
    }

    fn user_id(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::missing_field("user_id"))
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("has_value", &!self.value.is_empty())
            .field("expires_at", &self.expires_at)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// `expires_in` arrives as a number, or as a numeric string from older endpoints
fn expires_in_secs(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `now + secs`, or `None` when the sum leaves the representable range
fn expiry_after(now: DateTime<Utc>, secs: i64) -> Option<DateTime<Utc>> {
    let expiry = Duration::try_seconds(secs).and_then(|d| now.checked_add_signed(d));
    if expiry.is_none() {
        debug!("Ignoring out-of-range expires_in {secs}");
    }
    expiry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::stub_client;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn object(value: JsonValue) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_expiry_from_numeric_and_string_expires_in() {
        let (client, _) = stub_client(vec![]);
        let mut token = AccessToken::new(client);

        let body = object(json!({"access_token": "A", "expires_in": 3600}));
        token.set_data_from_response_at(&body, fixed_now());
        assert_eq!(token.value(), "A");
        assert_eq!(token.expires_at(), Some(fixed_now() + Duration::seconds(3600)));

        let body = object(json!({"access_token": "B", "expires_in": "5184000"}));
        token.set_data_from_response_at(&body, fixed_now());
        assert_eq!(token.value(), "B");
        assert_eq!(token.expires_at(), Some(fixed_now() + Duration::days(60)));
    }

    #[test]
    fn test_out_of_range_expires_in_leaves_expiry_unset() {
        let (client, _) = stub_client(vec![]);
        let mut token = AccessToken::new(client).with_expires_at(fixed_now());

        let body = object(json!({"access_token": "A", "expires_in": 9_000_000_000_000_000i64}));
        token.set_data_from_response_at(&body, fixed_now());
        assert_eq!(token.value(), "A");
        assert_eq!(token.expires_at(), None);

        let body = object(json!({"access_token": "B", "expires_in": i64::MIN}));
        token.set_data_from_response_at(&body, fixed_now());
        assert_eq!(token.value(), "B");
        assert_eq!(token.expires_at(), None);

        let body = object(json!({"access_token": "C", "expires_in": "-9000000000000000"}));
        token.set_data_from_response(&body);
        assert_eq!(token.expires_at(), None);
    }

    #[test]
    fn test_missing_expires_in_clears_expiry() {
        let (client, _) = stub_client(vec![]);
        let mut token = AccessToken::new(client).with_expires_at(fixed_now());

        token.set_data_from_response_at(&object(json!({"access_token": "C"})), fixed_now());
        assert_eq!(token.expires_at(), None);
        assert!(token.is_long_lived_at(fixed_now()));
    }

    #[test]
    fn test_error_response_leaves_token_untouched() {
        let (client, _) = stub_client(vec![]);
        let mut token = AccessToken::new(client);
        assert_eq!(token.value(), "tok");

        token.set_data_from_response_at(&object(json!({"error": {"code": 190}})), fixed_now());
        assert_eq!(token.value(), "tok");
    }

    #[test]
    fn test_long_lived_threshold() {
        let (client, _) = stub_client(vec![]);
        let now = fixed_now();

        let exactly_two_hours =
            AccessToken::new(client.clone()).with_expires_at(now + Duration::hours(2));
        assert!(!exactly_two_hours.is_long_lived_at(now));

        let just_over = AccessToken::new(client)
            .with_expires_at(now + Duration::hours(2) + Duration::seconds(1));
        assert!(just_over.is_long_lived_at(now));
    }
}
