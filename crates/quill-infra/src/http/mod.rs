//! HTTP adapter for the blog backend (reqwest).

mod client;
mod config;
mod convert;

pub use client::HttpBlogClient;
pub use config::HttpClientConfig;
