//! Names understood by the Graph API
//!
//! Field names, query parameter keys, metrics, and login scopes.

/// Field names used in `fields` expressions and response objects
pub mod field {
    pub const BIOGRAPHY: &str = "biography";
    pub const BUSINESS_DISCOVERY: &str = "business_discovery";
    pub const CAPTION: &str = "caption";
    pub const CHILDREN: &str = "children";
    pub const COMMENT_ID: &str = "comment_id";
    pub const COMMENTS: &str = "comments";
    pub const COMMENTS_COUNT: &str = "comments_count";
    pub const CURSORS: &str = "cursors";
    pub const FOLLOWERS_COUNT: &str = "followers_count";
    pub const FOLLOWS_COUNT: &str = "follows_count";
    pub const FROM: &str = "from";
    pub const HIDDEN: &str = "hidden";
    pub const ID: &str = "id";
    pub const IG_ID: &str = "ig_id";
    pub const INSTAGRAM_BUSINESS_ACCOUNT: &str = "instagram_business_account";
    pub const LIKE_COUNT: &str = "like_count";
    pub const MEDIA: &str = "media";
    pub const MEDIA_COUNT: &str = "media_count";
    pub const MEDIA_PRODUCT_TYPE: &str = "media_product_type";
    pub const MEDIA_TYPE: &str = "media_type";
    pub const MEDIA_URL: &str = "media_url";
    pub const MENTIONED_COMMENT: &str = "mentioned_comment";
    pub const NAME: &str = "name";
    pub const OWNER: &str = "owner";
    pub const PAGING: &str = "paging";
    pub const PARENT_ID: &str = "parent_id";
    pub const PERMALINK: &str = "permalink";
    pub const PROFILE_PICTURE_URL: &str = "profile_picture_url";
    pub const REPLIES: &str = "replies";
    pub const STATUS: &str = "status";
    pub const STATUS_CODE: &str = "status_code";
    pub const TEXT: &str = "text";
    pub const THUMBNAIL_URL: &str = "thumbnail_url";
    pub const TIMESTAMP: &str = "timestamp";
    pub const USER: &str = "user";
    pub const USERNAME: &str = "username";
    pub const WEBSITE: &str = "website";
}

/// Query/body parameter keys
pub mod param {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const AFTER: &str = "after";
    pub const BEFORE: &str = "before";
    pub const CHILDREN: &str = "children";
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const COMMENT_ENABLED: &str = "comment_enabled";
    pub const COMMENT_ID: &str = "comment_id";
    pub const CREATION_ID: &str = "creation_id";
    pub const FB_EXCHANGE_TOKEN: &str = "fb_exchange_token";
    pub const FIELDS: &str = "fields";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const HIDE: &str = "hide";
    pub const INPUT_TOKEN: &str = "input_token";
    pub const MEDIA_ID: &str = "media_id";
    pub const MEDIA_TYPE: &str = "media_type";
    pub const MESSAGE: &str = "message";
    pub const METRIC: &str = "metric";
    pub const PERIOD: &str = "period";
    pub const Q: &str = "q";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const STATE: &str = "state";
    pub const USER_ID: &str = "user_id";
    pub const VIDEO_URL: &str = "video_url";
}

/// Insight metric names
pub mod metric {
    pub const CAROUSEL_ALBUM_ENGAGEMENT: &str = "carousel_album_engagement";
    pub const CAROUSEL_ALBUM_IMPRESSIONS: &str = "carousel_album_impressions";
    pub const CAROUSEL_ALBUM_REACH: &str = "carousel_album_reach";
    pub const CAROUSEL_ALBUM_SAVED: &str = "carousel_album_saved";
    pub const CAROUSEL_ALBUM_VIDEO_VIEWS: &str = "carousel_album_video_views";
    pub const ENGAGEMENT: &str = "engagement";
    pub const EXITS: &str = "exits";
    pub const FOLLOWER_COUNT: &str = "follower_count";
    pub const IMPRESSIONS: &str = "impressions";
    pub const PROFILE_VIEWS: &str = "profile_views";
    pub const REACH: &str = "reach";
    pub const REPLIES: &str = "replies";
    pub const SAVED: &str = "saved";
    pub const TAPS_BACK: &str = "taps_back";
    pub const TAPS_FORWARD: &str = "taps_forward";
    pub const VIDEO_VIEWS: &str = "video_views";
    pub const WEBSITE_CLICKS: &str = "website_clicks";
}

/// Insight aggregation periods
pub mod period {
    pub const DAY: &str = "day";
    pub const LIFETIME: &str = "lifetime";
    pub const WEEK: &str = "week";
    pub const DAYS_28: &str = "days_28";
}

/// Container media types
pub mod media_type {
    pub const CAROUSEL: &str = "CAROUSEL";
    pub const REELS: &str = "REELS";
    pub const STORIES: &str = "STORIES";
    pub const VIDEO: &str = "VIDEO";
}

/// Login dialog permission scopes
pub mod scope {
    pub const ADS_MANAGEMENT: &str = "ads_management";
    pub const BUSINESS_MANAGEMENT: &str = "business_management";
    pub const INSTAGRAM_BASIC: &str = "instagram_basic";
    pub const INSTAGRAM_CONTENT_PUBLISH: &str = "instagram_content_publish";
    pub const INSTAGRAM_MANAGE_COMMENTS: &str = "instagram_manage_comments";
    pub const INSTAGRAM_MANAGE_INSIGHTS: &str = "instagram_manage_insights";
    pub const PAGES_SHOW_LIST: &str = "pages_show_list";
    pub const PAGES_READ_ENGAGEMENT: &str = "pages_read_engagement";
}

/// `grant_type` values
pub mod grant_type {
    pub const FB_EXCHANGE_TOKEN: &str = "fb_exchange_token";
}

/// `response_type` values for the login dialog
pub mod response_type {
    pub const CODE: &str = "code";
}
