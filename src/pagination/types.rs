//! Pagination types
//!
//! Cursor extraction from decoded responses and the link pair attached to
//! every response.

use crate::fields::{field, param};
use crate::types::{Direction, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Side-channel key holding the next page URL
pub const PAGING_NEXT_LINK: &str = "paging_next_link";

/// Side-channel key holding the previous page URL
pub const PAGING_PREVIOUS_LINK: &str = "paging_previous_link";

/// Ready-to-fetch URLs for the neighbouring pages
///
/// An empty string means there is no page in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingLinks {
    pub next: String,
    pub previous: String,
}

impl PagingLinks {
    pub fn new(next: impl Into<String>, previous: impl Into<String>) -> Self {
        Self {
            next: next.into(),
            previous: previous.into(),
        }
    }

    /// Link for a direction, `None` when that direction is exhausted
    pub fn get(&self, direction: Direction) -> Option<&str> {
        let link = match direction {
            Direction::Next => &self.next,
            Direction::Previous => &self.previous,
        };
        (!link.is_empty()).then_some(link.as_str())
    }

    pub fn set(&mut self, direction: Direction, link: impl Into<String>) {
        match direction {
            Direction::Next => self.next = link.into(),
            Direction::Previous => self.previous = link.into(),
        }
    }

    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty() && self.previous.is_empty()
    }

    /// Fill directions left empty here from `other`
    #[must_use]
    pub fn or(mut self, other: PagingLinks) -> Self {
        if self.next.is_empty() {
            self.next = other.next;
        }
        if self.previous.is_empty() {
            self.previous = other.previous;
        }
        self
    }
}

/// Cursor pair found in a `paging.cursors` object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl Cursors {
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.after.as_deref(),
            Direction::Previous => self.before.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// Walk a chain of object keys
pub fn lookup<'a>(body: &'a JsonObject, path: &[&str]) -> Option<&'a JsonValue> {
    let (first, rest) = path.split_first()?;
    let mut current = body.get(*first)?;
    for part in rest {
        current = current.as_object()?.get(*part)?;
    }
    Some(current)
}

/// Read `<path>.paging.cursors.{after,before}`
///
/// An empty `path` reads the top-level `paging` object. Missing or empty
/// cursors are reported as absent.
pub fn cursors_at(body: &JsonObject, path: &[&str]) -> Cursors {
    let mut full: Vec<&str> = path.to_vec();
    full.extend([field::PAGING, field::CURSORS]);

    let Some(cursors) = lookup(body, &full).and_then(JsonValue::as_object) else {
        return Cursors::default();
    };

    Cursors {
        after: cursor_value(cursors.get(param::AFTER)),
        before: cursor_value(cursors.get(param::BEFORE)),
    }
}

fn cursor_value(value: Option<&JsonValue>) -> Option<String> {
    let cursor = match value? {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        _ => return None,
    };
    (!cursor.is_empty()).then_some(cursor)
}

/// Links the API itself placed at `paging.next` / `paging.previous`
pub fn api_links(body: &JsonObject) -> PagingLinks {
    let read = |direction: Direction| {
        lookup(body, &[field::PAGING, direction.link_key()])
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string()
    };
    PagingLinks::new(read(Direction::Next), read(Direction::Previous))
}

/// Write links into the response
///
/// Non-empty links go to `paging.next` / `paging.previous`; both side-channel
/// keys are always written, empty or not.
pub fn attach_links(body: &mut JsonObject, links: &PagingLinks) {
    for direction in [Direction::Next, Direction::Previous] {
        let Some(link) = links.get(direction) else {
            continue;
        };
        let paging = body
            .entry(field::PAGING)
            .or_insert_with(|| JsonValue::Object(JsonObject::new()));
        if !paging.is_object() {
            *paging = JsonValue::Object(JsonObject::new());
        }
        if let Some(paging) = paging.as_object_mut() {
            paging.insert(
                direction.link_key().to_string(),
                JsonValue::String(link.to_string()),
            );
        }
    }

    body.insert(
        PAGING_NEXT_LINK.to_string(),
        JsonValue::String(links.next.clone()),
    );
    body.insert(
        PAGING_PREVIOUS_LINK.to_string(),
        JsonValue::String(links.previous.clone()),
    );
}
