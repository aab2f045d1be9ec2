//! Decoded Graph response with its paging links

use crate::pagination::{attach_links, PagingLinks};
use crate::types::{Direction, JsonObject, JsonValue};
use std::ops::Deref;

/// A decoded response plus the links to its neighbouring pages
///
/// The body always carries `paging_next_link` and `paging_previous_link`
/// once it leaves the client. Dereferences to the JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphResponse {
    body: JsonObject,
    links: PagingLinks,
}

impl GraphResponse {
    /// Wrap a body, writing the links into it
    pub fn new(mut body: JsonObject, links: PagingLinks) -> Self {
        attach_links(&mut body, &links);
        Self { body, links }
    }

    /// Response returned when there is no page to fetch
    pub fn empty() -> Self {
        Self::new(JsonObject::new(), PagingLinks::default())
    }

    pub fn body(&self) -> &JsonObject {
        &self.body
    }

    pub fn into_body(self) -> JsonObject {
        self.body
    }

    pub fn links(&self) -> &PagingLinks {
        &self.links
    }

    /// Link to the page in `direction`, if there is one
    pub fn link(&self, direction: Direction) -> Option<&str> {
        self.links.get(direction)
    }

    /// `data` array of a collection response
    pub fn data(&self) -> &[JsonValue] {
        self.body
            .get("data")
            .and_then(JsonValue::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Graph API `error` object, when the call was rejected
    pub fn error(&self) -> Option<&JsonObject> {
        self.body.get("error").and_then(JsonValue::as_object)
    }

    /// String field lookup
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(JsonValue::as_str)
    }
}

impl Deref for GraphResponse {
    type Target = JsonObject;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl From<GraphResponse> for JsonValue {
    fn from(response: GraphResponse) -> Self {
        JsonValue::Object(response.body)
    }
}
