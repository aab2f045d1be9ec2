//! Link computation strategies
//!
//! Each strategy turns the cursors of a decoded response into URLs for the
//! neighbouring pages.

use super::types::{cursors_at, PagingLinks};
use crate::fields::{field, param, splice_cursor};
use crate::http::RequestFactory;
use crate::types::{Direction, JsonObject, Method, Params};
use tracing::debug;

/// Computes paging links for a response
pub trait LinkStrategy: Send + Sync {
    /// Build links from the cursors in `body`
    ///
    /// Directions without a cursor are left empty.
    fn compute(&self, body: &JsonObject, factory: &RequestFactory) -> PagingLinks;
}

// ============================================================================
// Api Links
// ============================================================================

/// Computes nothing; only the links the API returned are used
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiProvidedLinks;

impl LinkStrategy for ApiProvidedLinks {
    fn compute(&self, _body: &JsonObject, _factory: &RequestFactory) -> PagingLinks {
        PagingLinks::default()
    }
}

// ============================================================================
// Simple Cursor Links
// ============================================================================

/// Top-level `paging.cursors` pagination
///
/// The neighbouring page is the original request re-issued as a GET with the
/// cursor added as an `after` / `before` parameter.
#[derive(Debug, Clone)]
pub struct SimpleCursorLinks {
    /// Endpoint of the original request
    pub endpoint: String,
    /// Parameters of the original request
    pub params: Params,
}

impl SimpleCursorLinks {
    pub fn new(endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            endpoint: endpoint.into(),
            params,
        }
    }
}

impl LinkStrategy for SimpleCursorLinks {
    fn compute(&self, body: &JsonObject, factory: &RequestFactory) -> PagingLinks {
        compute_simple_links(body, &self.endpoint, &self.params, factory)
    }
}

/// Links from `paging.cursors.{after,before}`
pub fn compute_simple_links(
    body: &JsonObject,
    endpoint: &str,
    params: &Params,
    factory: &RequestFactory,
) -> PagingLinks {
    let cursors = cursors_at(body, &[]);
    let mut links = PagingLinks::default();

    for direction in [Direction::Next, Direction::Previous] {
        if let Some(cursor) = cursors.get(direction) {
            let mut page_params = params.clone();
            page_params.insert(direction.cursor_key(), cursor);
            let request = factory.build(Method::GET, endpoint, page_params);
            links.set(direction, request.to_url());
        }
    }

    links
}

// ============================================================================
// Nested Cursor Links
// ============================================================================

/// Pagination of a relation nested inside a field expression
///
/// Used for business discovery, where cursors sit at
/// `business_discovery.media.paging.cursors` and the API only accepts them as
/// an argument of the `media` relation: `media.after(<cursor>){...}`.
#[derive(Debug, Clone)]
pub struct NestedCursorLinks {
    /// Endpoint the expression is requested from
    pub endpoint: String,
    /// Expression the cursor is spliced into; must hold `relation{` unparameterized
    pub expression: String,
    /// Object keys leading to the relation carrying `paging`
    pub path: Vec<String>,
    /// Relation name to parameterize
    pub relation: String,
}

impl NestedCursorLinks {
    /// Business discovery media pagination
    pub fn business_discovery(endpoint: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            expression: expression.into(),
            path: vec![
                field::BUSINESS_DISCOVERY.to_string(),
                field::MEDIA.to_string(),
            ],
            relation: field::MEDIA.to_string(),
        }
    }
}

impl LinkStrategy for NestedCursorLinks {
    fn compute(&self, body: &JsonObject, factory: &RequestFactory) -> PagingLinks {
        let path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        compute_nested_links(
            body,
            &path,
            &self.relation,
            &self.endpoint,
            &self.expression,
            factory,
        )
    }
}

/// Links from `<path>.paging.cursors`, spliced into `expression`
///
/// Each link is a GET whose only parameter is `fields`, holding `expression`
/// with the first `relation{` rewritten to carry the cursor.
pub fn compute_nested_links(
    body: &JsonObject,
    path: &[&str],
    relation: &str,
    endpoint: &str,
    expression: &str,
    factory: &RequestFactory,
) -> PagingLinks {
    let cursors = cursors_at(body, path);
    let mut links = PagingLinks::default();

    for direction in [Direction::Next, Direction::Previous] {
        let Some(cursor) = cursors.get(direction) else {
            continue;
        };
        let Some(fields) = splice_cursor(expression, relation, direction, cursor) else {
            debug!("No '{relation}{{' relation to carry the {direction:?} cursor");
            continue;
        };
        let request = factory.build(
            Method::GET,
            endpoint,
            Params::new().with(param::FIELDS, fields),
        );
        links.set(direction, request.to_url());
    }

    links
}
