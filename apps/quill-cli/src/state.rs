//! Application state - the ports every screen talks through.

use std::sync::Arc;

use quill_core::domain::PostDraft;
use quill_core::ports::{AuthApi, BlogApi, SessionStore};
use quill_infra::{InMemoryBlogBackend, InMemorySessionStore};

use crate::config::BackendConfig;

#[cfg(feature = "http")]
use quill_infra::HttpBlogClient;

/// Demo account available in offline mode.
pub const DEMO_EMAIL: &str = "demo@quill.dev";
pub const DEMO_PASSWORD: &str = "demo";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthApi>,
    pub blogs: Arc<dyn BlogApi>,
    pub session: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build the application state with the configured backend.
    pub async fn new(backend: &BackendConfig) -> anyhow::Result<Self> {
        match backend {
            #[cfg(feature = "http")]
            BackendConfig::Http(config) => {
                let client = Arc::new(HttpBlogClient::new(config)?);
                tracing::info!(api = %config.api_root(), "Using HTTP backend");
                Ok(Self {
                    auth: client.clone(),
                    blogs: client,
                    session: Arc::new(InMemorySessionStore::new()),
                })
            }
            BackendConfig::InMemory => {
                let backend = Arc::new(InMemoryBlogBackend::new());
                seed_demo_data(&backend).await;
                tracing::info!(
                    email = DEMO_EMAIL,
                    "Using in-memory backend with a demo account"
                );
                Ok(Self::in_memory(backend))
            }
        }
    }

    /// Wire both APIs to one in-memory backend.
    pub fn in_memory(backend: Arc<InMemoryBlogBackend>) -> Self {
        Self {
            auth: backend.clone(),
            blogs: backend,
            session: Arc::new(InMemorySessionStore::new()),
        }
    }
}

async fn seed_demo_data(backend: &InMemoryBlogBackend) {
    backend.add_account(DEMO_EMAIL, DEMO_PASSWORD).await;

    let samples = [
        (DEMO_EMAIL, "Hello, Quill", "First post on the demo backend. Sign in as the demo account to edit or delete it."),
        ("guest@quill.dev", "Paging through the feed", "The feed shows four posts per page. Use 'n' and 'p' to move between pages."),
        (DEMO_EMAIL, "Expand and collapse", "Long posts are cut to a short preview until opened. Opening another post collapses the one before it, so only one is ever expanded."),
        ("guest@quill.dev", "Not yours to edit", "Posts written by other accounts show up in the feed but never under My Blogs."),
        (DEMO_EMAIL, "Fifth post", "This one lands on the second page."),
    ];
    for (author, title, content) in samples {
        backend
            .add_post(author, &PostDraft::new(title, content))
            .await;
    }
}
