//! Command-line arguments.

use clap::Parser;

use quill_core::views::Route;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Terminal client for the Quill blog backend")]
pub struct Cli {
    /// Screen to start on: /, /form, /signup, /blogs or /myblogs
    #[arg(default_value = "/", value_name = "PATH")]
    pub start: Route,

    /// Base URL of the blog backend
    #[arg(long, env = "QUILL_API_BASE_URL", default_value = "http://localhost:8080")]
    pub api_base_url: String,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, env = "QUILL_HTTP_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Use the in-memory backend with a demo account instead of the server
    #[arg(
        long,
        env = "QUILL_OFFLINE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub offline: bool,
}
