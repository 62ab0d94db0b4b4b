//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `http` (default) - reqwest client talking to the real backend
//! - `minimal` - in-memory adapters only

pub mod memory;
pub mod session;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use memory::InMemoryBlogBackend;
pub use session::InMemorySessionStore;

#[cfg(feature = "http")]
pub use http::{HttpBlogClient, HttpClientConfig};
