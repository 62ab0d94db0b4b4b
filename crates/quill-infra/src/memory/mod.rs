//! In-process backend - used for offline demo mode and as a test double.

mod backend;

pub use backend::InMemoryBlogBackend;
