//! Resource wrappers
//!
//! Each wrapper pairs a Graph node id with the shared [`GraphClient`] and
//! knows the endpoint suffix and default parameters of one resource. They
//! hold no other state; every call goes straight to the client.
//!
//! # Resources
//!
//! | Wrapper | Endpoint |
//! |---------|----------|
//! | [`User`] | `/{user}`, `/me/accounts` |
//! | [`UserMedia`] | `/{user}/media` |
//! | [`MediaPublish`] | `/{user}/media_publish` |
//! | [`BusinessDiscovery`] | `/{user}?fields=business_discovery.username(...)` |
//! | [`Media`], [`MediaChildren`], [`MediaComments`], [`MediaInsights`] | `/{media}/...` |
//! | [`Comment`], [`Replies`] | `/{comment}/...` |
//! | [`Container`] | `/{container}` |
//! | [`Hashtag`], [`HashtagTopMedia`], [`HashtagRecentMedia`], [`HashtagSearch`] | `/{hashtag}/...`, `/ig_hashtag_search` |
//! | [`Page`] | `/{page}` |
//! | [`AccessToken`] | `/oauth/access_token`, `/debug_token`, `/{user}/permissions` |
//! | [`FacebookLogin`] | login dialog URL (no request) |

mod access_token;
mod business_discovery;
mod comment;
mod container;
mod hashtag;
mod login;
mod media;
mod page;
mod user;

pub use access_token::AccessToken;
pub use business_discovery::BusinessDiscovery;
pub use comment::{Comment, Replies};
pub use container::Container;
pub use hashtag::{Hashtag, HashtagRecentMedia, HashtagSearch, HashtagTopMedia};
pub use login::FacebookLogin;
pub use media::{InsightsMediaType, Media, MediaChildren, MediaComments, MediaInsights};
pub use page::Page;
pub use user::{
    LiveMedia, MediaPublish, MentionedComment, Mentions, Stories, Tags, User, UserInsights,
    UserMedia,
};

use crate::client::{GraphClient, GraphResponse};
use crate::error::{Error, Result};
use crate::fields::param;
use crate::types::Params;
use std::sync::Arc;

/// A Graph node id bound to a client
#[derive(Debug, Clone)]
pub struct Node {
    client: Arc<GraphClient>,
    id: String,
}

impl Node {
    /// Bind `id`; an empty id fails with `MissingConfigField { field: id_field }`
    pub fn new(client: Arc<GraphClient>, id_field: &str, id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            id: require(id_field, id)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn client(&self) -> &Arc<GraphClient> {
        &self.client
    }

    /// `/{id}`
    pub fn path(&self) -> String {
        format!("/{}", self.id)
    }

    /// `/{id}/{suffix}`
    pub fn edge(&self, suffix: &str) -> String {
        format!("/{}/{suffix}", self.id)
    }

    pub async fn get(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.client.get(endpoint, params).await
    }

    pub async fn post(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.client.post(endpoint, params).await
    }

    pub async fn delete(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.client.delete(endpoint, params).await
    }
}

/// Reject an empty identifier
pub(crate) fn require(field: &str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(value)
}

/// Caller params, or the defaults when the caller passed none
pub(crate) fn params_or(params: Params, default: impl FnOnce() -> Params) -> Params {
    if params.is_empty() {
        default()
    } else {
        params
    }
}

/// `fields=<expression>`
pub(crate) fn fields_param(expression: impl Into<String>) -> Params {
    Params::new().with(param::FIELDS, expression)
}
