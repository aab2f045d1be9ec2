//! Media container status

use super::{fields_param, params_or, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::Result;
use crate::fields::{field, join};
use crate::types::Params;
use std::sync::Arc;

const FIELDS: &[&str] = &[field::ID, field::STATUS, field::STATUS_CODE];

/// A media container awaiting publication
#[derive(Debug, Clone)]
pub struct Container {
    node: Node,
}

impl Container {
    pub fn new(client: Arc<GraphClient>, container_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "container_id", container_id)?,
        })
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    /// Upload status; `status_code` is `FINISHED` once the container can be published
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(join(FIELDS)));
        self.node.get(&self.node.path(), params).await
    }
}
