//! Business discovery: another account's public profile and media by username
//!
//! Media cursors come back at `business_discovery.media.paging.cursors` and
//! can only be sent as an argument of the `media` relation. Page links are
//! therefore built by splicing the cursor into the lookup expression, always
//! the base one derived from this wrapper's fields, never a rewritten one.

use super::{params_or, require, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::{business_discovery_expression, field, param};
use crate::pagination::{NestedCursorLinks, PagingLinks};
use crate::types::{Direction, Method, Params};
use std::sync::Arc;
use tracing::debug;

/// Profile fields requested by default
pub const DEFAULT_FIELDS: &[&str] = &[
    field::USERNAME,
    field::WEBSITE,
    field::NAME,
    field::IG_ID,
    field::ID,
    field::PROFILE_PICTURE_URL,
    field::BIOGRAPHY,
    field::FOLLOWS_COUNT,
    field::FOLLOWERS_COUNT,
    field::MEDIA_COUNT,
];

/// Media fields requested by default
pub const DEFAULT_MEDIA_FIELDS: &[&str] = &[
    field::ID,
    field::USERNAME,
    field::CAPTION,
    field::LIKE_COUNT,
    field::COMMENTS_COUNT,
    field::TIMESTAMP,
    field::MEDIA_PRODUCT_TYPE,
    field::MEDIA_TYPE,
    field::OWNER,
    field::PERMALINK,
    field::MEDIA_URL,
];

/// Lookup of `username` performed through `user_id`'s account
#[derive(Debug, Clone)]
pub struct BusinessDiscovery {
    node: Node,
    username: String,
    fields: Vec<String>,
    media_fields: Vec<String>,
}

impl BusinessDiscovery {
    pub fn new(
        client: Arc<GraphClient>,
        user_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
            username: require("username", username)?,
            fields: DEFAULT_FIELDS.iter().map(ToString::to_string).collect(),
            media_fields: DEFAULT_MEDIA_FIELDS.iter().map(ToString::to_string).collect(),
        })
    }

    /// Replace the profile fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the media fields
    #[must_use]
    pub fn media_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Base lookup expression, with an unparameterized `media{` relation
    pub fn expression(&self) -> String {
        business_discovery_expression(&self.username, &self.fields, &self.media_fields)
    }

    /// Profile and first media page
    ///
    /// Caller params replace the defaults; a caller-supplied `fields` value
    /// is also the expression page links are spliced into.
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || {
            Params::new().with(param::FIELDS, self.expression())
        });
        let expression = params
            .get(param::FIELDS)
            .map_or_else(|| self.expression(), ToString::to_string);

        let endpoint = self.node.path();
        let strategy = NestedCursorLinks::business_discovery(endpoint.as_str(), expression);
        self.node
            .client()
            .send_with(Method::GET, &endpoint, params, &strategy)
            .await
    }

    /// Follow the client's held media link in `direction`
    pub async fn get_media_page(&self, direction: Direction) -> Result<GraphResponse> {
        let links = self.node.client().paging_links().await;
        self.fetch_media_link(&links, direction).await
    }

    /// Follow a media link taken from an earlier response
    ///
    /// Links on the returned page are spliced into the base expression again,
    /// so paging can continue in either direction.
    pub async fn fetch_media_link(
        &self,
        links: &PagingLinks,
        direction: Direction,
    ) -> Result<GraphResponse> {
        let Some(url) = links.get(direction) else {
            debug!("No {direction:?} media link for business discovery");
            return Ok(GraphResponse::empty());
        };
        let strategy = NestedCursorLinks::business_discovery(self.node.path(), self.expression());
        self.node.client().fetch_custom_with(url, &strategy).await
    }
}
