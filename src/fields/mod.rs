//! Field expression module
//!
//! Builds the nested `fields` selection strings sent with Graph requests,
//! and holds the field, parameter, metric and scope names the API knows.

mod expression;
pub mod names;

pub use expression::{
    business_discovery_expression, comment_with_replies_expression, default_comment_fields,
    default_media_children_fields, default_media_fields, default_media_fields_expression,
    default_replies_fields, is_brace_balanced, join, media_with_children_expression,
    mentioned_comment_expression, parameterized_relation, relation, splice_cursor,
    with_relation, DEFAULT_COMMENT_FIELDS, DEFAULT_MEDIA_CHILDREN_FIELDS, DEFAULT_MEDIA_FIELDS,
    DEFAULT_REPLIES_FIELDS,
};
pub use names::{field, grant_type, media_type, metric, param, period, response_type, scope};
