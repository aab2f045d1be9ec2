//! CLI module
//!
//! Command-line access to the client, printing every response as JSON.
//!
//! # Commands
//!
//! - `login-url` - Print the Facebook login dialog URL
//! - `exchange-code` - Exchange a login code for an access token
//! - `long-lived` - Exchange a short-lived token for a long-lived one
//! - `debug-token` - Inspect a token
//! - `get` - GET any endpoint, optionally following page links
//! - `business-discovery` - Look up another account by username

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{parse_param, Runner};
