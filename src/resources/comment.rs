//! Comment resources

use super::{fields_param, params_or, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::{comment_with_replies_expression, default_replies_fields, param};
use crate::types::Params;
use std::sync::Arc;

/// A comment on a media object
#[derive(Debug, Clone)]
pub struct Comment {
    node: Node,
}

impl Comment {
    pub fn new(client: Arc<GraphClient>, comment_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "comment_id", comment_id)?,
        })
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    /// The comment with its replies
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(comment_with_replies_expression()));
        self.node.get(&self.node.path(), params).await
    }

    /// Hide or unhide the comment
    pub async fn set_hidden(&self, hidden: bool) -> Result<GraphResponse> {
        let params = Params::new().with(param::HIDE, hidden.to_string());
        self.node.post(&self.node.path(), params).await
    }

    /// Delete the comment
    pub async fn remove(&self) -> Result<GraphResponse> {
        self.node.delete(&self.node.path(), Params::new()).await
    }
}

/// Replies to a comment
#[derive(Debug, Clone)]
pub struct Replies {
    node: Node,
}

impl Replies {
    const ENDPOINT: &'static str = "replies";

    pub fn new(client: Arc<GraphClient>, comment_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "comment_id", comment_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(default_replies_fields()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }

    pub async fn create(&self, message: &str) -> Result<GraphResponse> {
        let params = Params::new().with(param::MESSAGE, message);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }
}
