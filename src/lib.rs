// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Instagram Graph
//!
//! An async client for the Instagram Graph API.
//!
//! ## Features
//!
//! - **Request construction**: query string for GET/DELETE, form body for POST,
//!   access token merged at serialization time
//! - **Cursor pagination**: every response carries ready-to-fetch links to its
//!   neighbouring pages, including business discovery media nested two levels deep
//! - **Field expressions**: builders for nested `fields` selections
//! - **Resources**: users, media, comments, hashtags, containers, pages, tokens
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use instagram_graph::{ClientConfig, GraphClient, Params, Direction};
//! use instagram_graph::resources::UserMedia;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> instagram_graph::Result<()> {
//!     let config = ClientConfig::new().access_token("EAAB...");
//!     let client = Arc::new(GraphClient::new(config)?);
//!
//!     let media = UserMedia::new(client.clone(), "17841400000000000")?;
//!     let first = media.get_self(Params::new()).await?;
//!     let second = client.fetch_link(first.links(), Direction::Next).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Resource wrappers                        │
//! │  User  Media  Comment  Hashtag  BusinessDiscovery  Token ... │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴────────────────────────────────┐
//! │                        GraphClient                           │
//! │  build request → send → compute links → attach to response   │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────┬─────────────────────────┐
//! │    Fields    │     Pagination      │        Transport        │
//! ├──────────────┼─────────────────────┼─────────────────────────┤
//! │ Expressions  │ Simple cursors      │ reqwest, one attempt    │
//! │ Splicing     │ Nested cursors      │ JSON object decoding    │
//! └──────────────┴─────────────────────┴─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Field expressions and API names
pub mod fields;

/// Requests and the HTTP transport
pub mod http;

/// Paging link strategies
pub mod pagination;

/// Client configuration
pub mod config;

/// Graph API client
pub mod client;

/// Resource wrappers
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{GraphClient, GraphResponse};
pub use config::ClientConfig;
pub use http::{HttpTransport, Request, Transport};
pub use pagination::PagingLinks;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
