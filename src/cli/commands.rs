//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Instagram Graph API command-line client
#[derive(Parser, Debug)]
#[command(name = "instagram-graph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON, takes precedence over --config
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the login dialog URL (requires app_id)
    LoginUrl {
        /// Where the dialog redirects with the code
        #[arg(long)]
        redirect_uri: String,

        /// Permission scopes (comma-separated)
        #[arg(long, default_value = "instagram_basic,pages_show_list")]
        scopes: String,

        /// Opaque state echoed back on redirect
        #[arg(long, default_value = "")]
        state: String,
    },

    /// Exchange a login code for an access token (requires app_id and app_secret)
    ExchangeCode {
        /// Code from the login redirect
        code: String,

        /// Redirect URI used for the dialog
        #[arg(long)]
        redirect_uri: String,
    },

    /// Exchange a short-lived token for a long-lived one
    LongLived {
        /// Short-lived token (defaults to the configured token)
        token: Option<String>,
    },

    /// Inspect a token via debug_token
    DebugToken {
        /// Token to inspect (defaults to the configured token)
        token: Option<String>,
    },

    /// GET an endpoint, e.g. `/me/accounts` or `/17841400000000000/media`
    Get {
        /// Endpoint path
        endpoint: String,

        /// Field expression
        #[arg(long)]
        fields: Option<String>,

        /// Extra parameter as key=value (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Number of pages to fetch by following next links
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Look up another business account by username
    BusinessDiscovery {
        /// Your Instagram user id
        user_id: String,

        /// Username to look up
        username: String,

        /// Number of media pages to fetch
        #[arg(long, default_value = "1")]
        pages: usize,
    },
}
