//! Field expression builders
//!
//! A field expression selects which attributes and relations a Graph request
//! returns: `id,caption,children{id,media_url}`. A relation may carry an
//! argument, `business_discovery.username(name){...}`, which is also how the
//! API accepts cursors for a nested relation: `media.after(cursor){...}`.
//!
//! Every builder here is a pure function over its inputs.

use super::names::field;
use crate::types::Direction;

/// Fields returned for each comment
pub const DEFAULT_COMMENT_FIELDS: &[&str] = &[
    field::FROM,
    field::HIDDEN,
    field::ID,
    field::LIKE_COUNT,
    field::MEDIA,
    field::PARENT_ID,
    field::TEXT,
    field::TIMESTAMP,
    field::USER,
    field::USERNAME,
];

/// Fields returned for a media object
pub const DEFAULT_MEDIA_FIELDS: &[&str] = &[
    field::ID,
    field::CAPTION,
    field::COMMENTS_COUNT,
    field::LIKE_COUNT,
    field::MEDIA_TYPE,
    field::MEDIA_URL,
    field::PERMALINK,
    field::TIMESTAMP,
    field::THUMBNAIL_URL,
];

/// Fields returned for each child of a carousel
pub const DEFAULT_MEDIA_CHILDREN_FIELDS: &[&str] =
    &[field::ID, field::MEDIA_TYPE, field::MEDIA_URL];

/// Fields returned for each reply to a comment
pub const DEFAULT_REPLIES_FIELDS: &[&str] = DEFAULT_COMMENT_FIELDS;

/// Comma-join a list of field names
pub fn join<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// `name{sub}`
pub fn relation(name: &str, sub: &str) -> String {
    format!("{name}{{{sub}}}")
}

/// Append `name{sub}` to `base` as a sibling field
pub fn with_relation(base: &str, name: &str, sub: &str) -> String {
    if base.is_empty() {
        relation(name, sub)
    } else {
        format!("{base},{}", relation(name, sub))
    }
}

/// `name.param(value){sub}`
pub fn parameterized_relation(name: &str, param: &str, value: &str, sub: &str) -> String {
    format!("{name}.{param}({value}){{{sub}}}")
}

pub fn default_comment_fields() -> String {
    join(DEFAULT_COMMENT_FIELDS)
}

pub fn default_media_fields() -> String {
    join(DEFAULT_MEDIA_FIELDS)
}

pub fn default_media_children_fields() -> String {
    join(DEFAULT_MEDIA_CHILDREN_FIELDS)
}

pub fn default_replies_fields() -> String {
    join(DEFAULT_REPLIES_FIELDS)
}

/// Media fields plus the `children{...}` relation
pub fn media_with_children_expression() -> String {
    with_relation(
        &default_media_fields(),
        field::CHILDREN,
        &default_media_children_fields(),
    )
}

/// Comment fields plus a `replies{...}` relation
pub fn comment_with_replies_expression() -> String {
    with_relation(
        &default_comment_fields(),
        field::REPLIES,
        &default_replies_fields(),
    )
}

/// Full media expression: media fields, carousel children, and comments with
/// their replies
pub fn default_media_fields_expression() -> String {
    with_relation(
        &media_with_children_expression(),
        field::COMMENTS,
        &comment_with_replies_expression(),
    )
}

/// `business_discovery.username(<username>){<fields>,media{<media_fields>,children{...}}}`
pub fn business_discovery_expression<S: AsRef<str>>(
    username: &str,
    fields: &[S],
    media_fields: &[S],
) -> String {
    let media = with_relation(
        &join(media_fields),
        field::CHILDREN,
        &default_media_children_fields(),
    );
    parameterized_relation(
        field::BUSINESS_DISCOVERY,
        field::USERNAME,
        username,
        &with_relation(&join(fields), field::MEDIA, &media),
    )
}

/// `mentioned_comment.comment_id(<id>){<comment fields>,replies{...}}`
pub fn mentioned_comment_expression(comment_id: &str) -> String {
    parameterized_relation(
        field::MENTIONED_COMMENT,
        field::COMMENT_ID,
        comment_id,
        &comment_with_replies_expression(),
    )
}

/// Inject a cursor into a nested relation of an existing expression
///
/// Rewrites the first `relation{` into `relation.after(cursor){` (or
/// `.before(`) and leaves the rest of the expression untouched. Returns
/// `None` when the unparameterized relation does not occur, which includes
/// an expression that was already rewritten by an earlier call.
pub fn splice_cursor(
    expression: &str,
    relation_name: &str,
    direction: Direction,
    cursor: &str,
) -> Option<String> {
    let needle = format!("{relation_name}{{");
    if !expression.contains(&needle) {
        return None;
    }
    let replacement = format!("{relation_name}.{}({cursor}){{", direction.cursor_key());
    Some(expression.replacen(&needle, &replacement, 1))
}

/// Whether every `{` has a matching `}` in order
pub fn is_brace_balanced(expression: &str) -> bool {
    let mut depth: usize = 0;
    for c in expression.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}
