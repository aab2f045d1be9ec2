//! Hashtag resources

use super::{fields_param, params_or, require, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::{field, join, media_with_children_expression, param};
use crate::types::Params;
use std::sync::Arc;

const ENDPOINT_SEARCH: &str = "/ig_hashtag_search";
const ENDPOINT_TOP_MEDIA: &str = "top_media";
const ENDPOINT_RECENT_MEDIA: &str = "recent_media";

#[derive(Debug, Clone)]
pub struct Hashtag {
    node: Node,
}

impl Hashtag {
    pub fn new(client: Arc<GraphClient>, hashtag_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "hashtag_id", hashtag_id)?,
        })
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(join(&[field::ID, field::NAME])));
        self.node.get(&self.node.path(), params).await
    }
}

/// Media under a hashtag, fetched on behalf of `user_id`
#[derive(Debug, Clone)]
struct HashtagMedia {
    node: Node,
    user_id: String,
}

impl HashtagMedia {
    fn new(
        client: Arc<GraphClient>,
        hashtag_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "hashtag_id", hashtag_id)?,
            user_id: require("user_id", user_id)?,
        })
    }

    async fn get(&self, edge: &str, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || {
            fields_param(media_with_children_expression()).with(param::USER_ID, self.user_id.as_str())
        });
        self.node.get(&self.node.edge(edge), params).await
    }
}

/// Most popular media tagged with a hashtag
#[derive(Debug, Clone)]
pub struct HashtagTopMedia {
    inner: HashtagMedia,
}

impl HashtagTopMedia {
    pub fn new(
        client: Arc<GraphClient>,
        hashtag_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            inner: HashtagMedia::new(client, hashtag_id, user_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        self.inner.get(ENDPOINT_TOP_MEDIA, params).await
    }
}

/// Media tagged with a hashtag in the last 24 hours
#[derive(Debug, Clone)]
pub struct HashtagRecentMedia {
    inner: HashtagMedia,
}

impl HashtagRecentMedia {
    pub fn new(
        client: Arc<GraphClient>,
        hashtag_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            inner: HashtagMedia::new(client, hashtag_id, user_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        self.inner.get(ENDPOINT_RECENT_MEDIA, params).await
    }
}

/// Hashtag id lookup by name
#[derive(Debug, Clone)]
pub struct HashtagSearch {
    client: Arc<GraphClient>,
    user_id: String,
}

impl HashtagSearch {
    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            user_id: require("user_id", user_id)?,
        })
    }

    /// Resolve `name` (without `#`) to a hashtag id
    pub async fn get_self(&self, name: &str) -> Result<GraphResponse> {
        let params = Params::new()
            .with(param::USER_ID, self.user_id.as_str())
            .with(param::Q, require("hashtag", name)?);
        self.client.get(ENDPOINT_SEARCH, params).await
    }
}
