//! Pagination module
//!
//! Supports: API-provided links, top-level cursors, nested relation cursors
//!
//! # Overview
//!
//! Graph API collections carry opaque cursors under `paging.cursors`. The
//! strategies here turn those cursors into ready-to-fetch URLs, which the
//! client attaches to every response as `paging_next_link` and
//! `paging_previous_link`.

mod strategies;
mod types;

pub use strategies::{
    compute_nested_links, compute_simple_links, ApiProvidedLinks, LinkStrategy,
    NestedCursorLinks, SimpleCursorLinks,
};
pub use types::{
    api_links, attach_links, cursors_at, lookup, Cursors, PagingLinks, PAGING_NEXT_LINK,
    PAGING_PREVIOUS_LINK,
};

#[cfg(test)]
mod tests;
