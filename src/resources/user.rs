//! Instagram user resources

use super::{fields_param, params_or, require, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::{
    self, default_media_fields, default_media_fields_expression, field, media_type,
    media_with_children_expression, mentioned_comment_expression, metric, param, period,
};
use crate::types::Params;
use std::sync::Arc;

/// Profile fields requested for a user
pub const USER_FIELDS: &[&str] = &[
    field::BIOGRAPHY,
    field::ID,
    field::IG_ID,
    field::FOLLOWERS_COUNT,
    field::FOLLOWS_COUNT,
    field::MEDIA_COUNT,
    field::NAME,
    field::PROFILE_PICTURE_URL,
    field::USERNAME,
    field::WEBSITE,
];

const PAGES_ENDPOINT: &str = "/me/accounts";

/// An Instagram business or creator account
#[derive(Debug, Clone)]
pub struct User {
    node: Node,
}

impl User {
    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    /// Profile of the user
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(fields::join(USER_FIELDS)));
        self.node.get(&self.node.path(), params).await
    }

    /// Facebook pages the token's user manages, paged by cursor
    pub async fn get_user_pages(&self, params: Params) -> Result<GraphResponse> {
        self.node.client().get(PAGES_ENDPOINT, params).await
    }
}

/// Media published by a user, and container creation
#[derive(Debug, Clone)]
pub struct UserMedia {
    node: Node,
}

impl UserMedia {
    const ENDPOINT: &'static str = "media";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    /// The user's media, with children and comments by default
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(default_media_fields_expression()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }

    /// Create a media container
    ///
    /// A `video_url` without an explicit `media_type` becomes a `VIDEO`
    /// container; a `children` list makes a `CAROUSEL`.
    pub async fn create(&self, params: Params) -> Result<GraphResponse> {
        let params = container_params(params);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }
}

fn container_params(mut params: Params) -> Params {
    if params.contains_key(param::VIDEO_URL) {
        if !params.contains_key(param::MEDIA_TYPE) {
            params.insert(param::MEDIA_TYPE, media_type::VIDEO);
        }
    } else if params.contains_key(param::CHILDREN) {
        params.insert(param::MEDIA_TYPE, media_type::CAROUSEL);
    }
    params
}

/// Publishing of a finished container
#[derive(Debug, Clone)]
pub struct MediaPublish {
    node: Node,
}

impl MediaPublish {
    const ENDPOINT: &'static str = "media_publish";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    pub async fn create(&self, container_id: &str) -> Result<GraphResponse> {
        let params = Params::new().with(param::CREATION_ID, require("container_id", container_id)?);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Account-level insights
#[derive(Debug, Clone)]
pub struct UserInsights {
    node: Node,
}

impl UserInsights {
    const ENDPOINT: &'static str = "insights";
    const METRICS: &'static [&'static str] = &[metric::IMPRESSIONS, metric::REACH];

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    /// Daily impressions and reach by default
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || {
            Params::new()
                .with(param::METRIC, fields::join(Self::METRICS))
                .with(param::PERIOD, period::DAY)
        });
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Live stories of a user
#[derive(Debug, Clone)]
pub struct Stories {
    node: Node,
}

impl Stories {
    const ENDPOINT: &'static str = "stories";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Live video broadcasts of a user
#[derive(Debug, Clone)]
pub struct LiveMedia {
    node: Node,
}

impl LiveMedia {
    const ENDPOINT: &'static str = "live_media";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(default_media_fields()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Media the user has been tagged in
#[derive(Debug, Clone)]
pub struct Tags {
    node: Node,
}

impl Tags {
    const ENDPOINT: &'static str = "tags";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(media_with_children_expression()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Replies to media and comments the user was @mentioned in
#[derive(Debug, Clone)]
pub struct Mentions {
    node: Node,
}

impl Mentions {
    const ENDPOINT: &'static str = "mentions";

    pub fn new(client: Arc<GraphClient>, user_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
        })
    }

    /// Comment on media whose caption mentions the user
    pub async fn reply_to_media(&self, media_id: &str, message: &str) -> Result<GraphResponse> {
        let params = Params::new()
            .with(param::MEDIA_ID, require("media_id", media_id)?)
            .with(param::MESSAGE, message);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }

    /// Reply to a comment that mentions the user
    pub async fn reply_to_comment(
        &self,
        media_id: &str,
        comment_id: &str,
        message: &str,
    ) -> Result<GraphResponse> {
        let params = Params::new()
            .with(param::MEDIA_ID, require("media_id", media_id)?)
            .with(param::COMMENT_ID, require("comment_id", comment_id)?)
            .with(param::MESSAGE, message);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// A comment in which the user was @mentioned
#[derive(Debug, Clone)]
pub struct MentionedComment {
    node: Node,
    comment_id: String,
}

impl MentionedComment {
    pub fn new(
        client: Arc<GraphClient>,
        user_id: impl Into<String>,
        comment_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "user_id", user_id)?,
            comment_id: require("comment_id", comment_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || {
            fields_param(mentioned_comment_expression(&self.comment_id))
        });
        self.node.get(&self.node.path(), params).await
    }
}
