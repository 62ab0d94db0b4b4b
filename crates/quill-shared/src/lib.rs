//! # Quill Shared
//!
//! Wire types exchanged with the blog backend.
//! Field names follow the backend's camelCase JSON.

pub mod dto;

pub use dto::{BlogPageResponse, BlogPayload, BlogResponse};
