//! Facebook page linked to an Instagram account

use super::{fields_param, params_or, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::field;
use crate::types::Params;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Page {
    node: Node,
}

impl Page {
    pub fn new(client: Arc<GraphClient>, page_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "page_id", page_id)?,
        })
    }

    /// The page's `instagram_business_account` by default
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(field::INSTAGRAM_BUSINESS_ACCOUNT));
        self.node.get(&self.node.path(), params).await
    }
}
