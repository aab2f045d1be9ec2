//! Media resources

use super::{fields_param, params_or, Node};
use crate::client::{GraphClient, GraphResponse};
use crate::error::{Error, Result};
use crate::fields::{
    comment_with_replies_expression, default_media_children_fields,
    default_media_fields_expression, join, metric, param,
};
use crate::types::Params;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A published photo, video, carousel or story
#[derive(Debug, Clone)]
pub struct Media {
    node: Node,
}

impl Media {
    pub fn new(client: Arc<GraphClient>, media_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "media_id", media_id)?,
        })
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(default_media_fields_expression()));
        self.node.get(&self.node.path(), params).await
    }

    /// Turn commenting on or off
    pub async fn set_comments_enabled(&self, enabled: bool) -> Result<GraphResponse> {
        let params = Params::new().with(param::COMMENT_ENABLED, enabled.to_string());
        self.node.post(&self.node.path(), params).await
    }
}

/// Items of a carousel album
#[derive(Debug, Clone)]
pub struct MediaChildren {
    node: Node,
}

impl MediaChildren {
    const ENDPOINT: &'static str = "children";

    pub fn new(client: Arc<GraphClient>, media_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "media_id", media_id)?,
        })
    }

    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(default_media_children_fields()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Top-level comments on a media object
#[derive(Debug, Clone)]
pub struct MediaComments {
    node: Node,
}

impl MediaComments {
    const ENDPOINT: &'static str = "comments";

    pub fn new(client: Arc<GraphClient>, media_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "media_id", media_id)?,
        })
    }

    /// Comments with their replies, paged by cursor
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || fields_param(comment_with_replies_expression()));
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }

    pub async fn create(&self, message: &str) -> Result<GraphResponse> {
        let params = Params::new().with(param::MESSAGE, message);
        self.node.post(&self.node.edge(Self::ENDPOINT), params).await
    }
}

/// Kind of media, which decides the insight metrics available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightsMediaType {
    CarouselAlbum,
    Video,
    Story,
    Image,
}

impl InsightsMediaType {
    /// Metrics requested by default for this kind
    pub fn metrics(&self) -> &'static [&'static str] {
        match self {
            Self::CarouselAlbum => &[
                metric::IMPRESSIONS,
                metric::REACH,
                metric::CAROUSEL_ALBUM_ENGAGEMENT,
                metric::CAROUSEL_ALBUM_IMPRESSIONS,
                metric::CAROUSEL_ALBUM_REACH,
                metric::CAROUSEL_ALBUM_SAVED,
                metric::CAROUSEL_ALBUM_VIDEO_VIEWS,
                metric::ENGAGEMENT,
                metric::VIDEO_VIEWS,
                metric::SAVED,
            ],
            Self::Video => &[
                metric::IMPRESSIONS,
                metric::REACH,
                metric::ENGAGEMENT,
                metric::VIDEO_VIEWS,
                metric::SAVED,
            ],
            Self::Story => &[
                metric::IMPRESSIONS,
                metric::REACH,
                metric::EXITS,
                metric::REPLIES,
                metric::TAPS_FORWARD,
                metric::TAPS_BACK,
            ],
            Self::Image => &[
                metric::IMPRESSIONS,
                metric::REACH,
                metric::ENGAGEMENT,
                metric::SAVED,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CarouselAlbum => "carousel_album",
            Self::Video => "video",
            Self::Story => "story",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for InsightsMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsightsMediaType {
    type Err = Error;

    /// Case-insensitive, accepting the API's `media_type` values
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "carousel_album" => Ok(Self::CarouselAlbum),
            "video" => Ok(Self::Video),
            "story" => Ok(Self::Story),
            "image" => Ok(Self::Image),
            other => Err(Error::invalid_value(
                "media_type",
                format!("unknown media type '{other}'"),
            )),
        }
    }
}

/// Insights of one media object
#[derive(Debug, Clone)]
pub struct MediaInsights {
    node: Node,
    media_type: InsightsMediaType,
}

impl MediaInsights {
    const ENDPOINT: &'static str = "insights";

    pub fn new(
        client: Arc<GraphClient>,
        media_id: impl Into<String>,
        media_type: InsightsMediaType,
    ) -> Result<Self> {
        Ok(Self {
            node: Node::new(client, "media_id", media_id)?,
            media_type,
        })
    }

    pub fn media_type(&self) -> InsightsMediaType {
        self.media_type
    }

    /// Every metric available for the media type by default
    pub async fn get_self(&self, params: Params) -> Result<GraphResponse> {
        let params = params_or(params, || {
            Params::new().with(param::METRIC, join(self.media_type.metrics()))
        });
        self.node.get(&self.node.edge(Self::ENDPOINT), params).await
    }
}
