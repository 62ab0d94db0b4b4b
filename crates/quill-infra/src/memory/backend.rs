//! In-memory blog backend.
//!
//! Follows the same rules as the HTTP backend: one signed-in session per
//! instance, posts only created by a signed-in user, edit and delete only by
//! the post's author, zero-based pages without clamping.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::ClientError;
use quill_core::domain::{Credentials, FeedPage, PageRequest, Post, PostDraft, PostId};
use quill_core::ports::{AuthApi, BlogApi, SignedIn};

const LOGIN_REQUIRED: &str = "Unauthorized: Please log in.";

#[derive(Default)]
struct BackendState {
    passwords: HashMap<String, String>,
    posts: Vec<Post>,
    signed_in: Option<String>,
    next_id: u64,
}

impl BackendState {
    fn require_session(&self) -> Result<String, ClientError> {
        self.signed_in
            .clone()
            .ok_or_else(|| ClientError::Unauthenticated(LOGIN_REQUIRED.to_string()))
    }

    fn owned_index(&self, id: &PostId, email: &str) -> Result<usize, ClientError> {
        let index = self
            .posts
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ClientError::NotFound("Blog not found.".to_string()))?;
        if self.posts[index].author_email.as_deref() != Some(email) {
            return Err(ClientError::Forbidden(
                "You can't change this blog.".to_string(),
            ));
        }
        Ok(index)
    }

    fn insert(&mut self, author_email: &str, draft: &PostDraft) -> Post {
        self.next_id += 1;
        let post = Post {
            id: PostId::new(format!("{:024x}", self.next_id)),
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: None,
            author_email: Some(author_email.to_string()),
            created_at: Some(Utc::now().naive_utc()),
        };
        self.posts.push(post.clone());
        post
    }
}

/// Blog backend kept entirely in memory behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogBackend {
    state: RwLock<BackendState>,
}

impl InMemoryBlogBackend {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BackendState::default()),
        }
    }

    /// Register an account directly, bypassing the duplicate check.
    pub async fn add_account(&self, email: &str, password: &str) {
        let mut state = self.state.write().await;
        state
            .passwords
            .insert(email.to_string(), password.to_string());
    }

    /// Store a post as if `author_email` had created it.
    pub async fn add_post(&self, author_email: &str, draft: &PostDraft) -> Post {
        let mut state = self.state.write().await;
        state.insert(author_email, draft)
    }

    pub async fn signed_in(&self) -> Option<String> {
        self.state.read().await.signed_in.clone()
    }

    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }
}

impl Default for InMemoryBlogBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for InMemoryBlogBackend {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ClientError> {
        let mut state = self.state.write().await;
        let valid = state
            .passwords
            .get(&credentials.email)
            .is_some_and(|stored| stored == &credentials.password);
        if !valid {
            tracing::debug!(email = %credentials.email, "Rejected login");
            return Err(ClientError::InvalidCredentials);
        }
        state.signed_in = Some(credentials.email.clone());
        Ok(SignedIn {
            email: credentials.email.clone(),
        })
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let mut state = self.state.write().await;
        if state.passwords.contains_key(&credentials.email) {
            return Err(ClientError::AccountExists);
        }
        state
            .passwords
            .insert(credentials.email.clone(), credentials.password.clone());
        tracing::debug!(email = %credentials.email, "Registered account");
        Ok(())
    }
}

#[async_trait]
impl BlogApi for InMemoryBlogBackend {
    async fn fetch_page(&self, request: PageRequest) -> Result<FeedPage, ClientError> {
        if request.size == 0 {
            return Err(ClientError::Validation(
                "Page size must not be less than one".to_string(),
            ));
        }
        let state = self.state.read().await;
        let size = request.size as usize;
        let total = state.posts.len();
        let posts = state
            .posts
            .iter()
            .skip(request.page as usize * size)
            .take(size)
            .cloned()
            .collect();

        Ok(FeedPage {
            posts,
            total_pages: total.div_ceil(size) as u32,
            current_page: request.page,
            total_items: Some(total as u64),
        })
    }

    async fn fetch_owned(&self) -> Result<Vec<Post>, ClientError> {
        let state = self.state.read().await;
        let email = state.require_session()?;
        Ok(state
            .posts
            .iter()
            .filter(|p| p.author_email.as_deref() == Some(email.as_str()))
            .cloned()
            .collect())
    }

    async fn fetch_post(&self, id: &PostId) -> Result<Post, ClientError> {
        let state = self.state.read().await;
        state
            .posts
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("post {id}")))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Option<Post>, ClientError> {
        let mut state = self.state.write().await;
        let email = state.require_session()?;
        let post = state.insert(&email, draft);
        tracing::debug!(id = %post.id, "Created post");
        Ok(Some(post))
    }

    async fn update_post(
        &self,
        id: &PostId,
        draft: &PostDraft,
    ) -> Result<Option<Post>, ClientError> {
        let mut state = self.state.write().await;
        let email = state.require_session()?;
        let index = state.owned_index(id, &email)?;
        let post = &mut state.posts[index];
        post.title = draft.title.clone();
        post.content = draft.content.clone();
        // The backend stamps edits as a fresh creation time.
        post.created_at = Some(Utc::now().naive_utc());
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ClientError> {
        let mut state = self.state.write().await;
        let email = state.require_session()?;
        let index = state.owned_index(id, &email)?;
        state.posts.remove(index);
        tracing::debug!(%id, "Deleted post");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn signed_in_backend() -> InMemoryBlogBackend {
        let backend = InMemoryBlogBackend::new();
        backend.add_account("ann@example.com", "pw").await;
        backend
            .login(&Credentials::new("ann@example.com", "pw"))
            .await
            .unwrap();
        backend
    }

    #[tokio::test]
    async fn test_login_and_register_rules() {
        let backend = InMemoryBlogBackend::new();
        let creds = Credentials::new("bo@example.com", "secret");

        backend.register(&creds).await.unwrap();
        assert_eq!(
            backend.register(&creds).await,
            Err(ClientError::AccountExists)
        );
        assert_eq!(
            backend
                .login(&Credentials::new("bo@example.com", "nope"))
                .await,
            Err(ClientError::InvalidCredentials)
        );
        assert!(backend.signed_in().await.is_none());

        backend.login(&creds).await.unwrap();
        assert_eq!(backend.signed_in().await.as_deref(), Some("bo@example.com"));
    }

    #[tokio::test]
    async fn test_pages_are_not_clamped() {
        let backend = InMemoryBlogBackend::new();
        for n in 0..9 {
            backend
                .add_post("ann@example.com", &PostDraft::new(format!("t{n}"), "c"))
                .await;
        }

        let last = backend.fetch_page(PageRequest::feed(2)).await.unwrap();
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.current_page, 2);
        assert_eq!(last.posts.len(), 1);
        assert_eq!(last.total_items, Some(9));

        let beyond = backend.fetch_page(PageRequest::feed(5)).await.unwrap();
        assert!(beyond.posts.is_empty());
        assert_eq!(beyond.current_page, 5);
    }

    #[tokio::test]
    async fn test_create_requires_session() {
        let backend = InMemoryBlogBackend::new();
        let result = backend.create_post(&PostDraft::new("t", "c")).await;
        assert!(matches!(result, Err(ClientError::Unauthenticated(_))));
        assert_eq!(backend.post_count().await, 0);
    }

    #[tokio::test]
    async fn test_only_author_may_edit_or_delete() {
        let backend = signed_in_backend().await;
        let foreign = backend
            .add_post("someone@else.com", &PostDraft::new("t", "c"))
            .await;

        let update = backend
            .update_post(&foreign.id, &PostDraft::new("x", "y"))
            .await;
        assert!(matches!(update, Err(ClientError::Forbidden(_))));
        let delete = backend.delete_post(&foreign.id).await;
        assert!(matches!(delete, Err(ClientError::Forbidden(_))));
        let missing = backend.delete_post(&PostId::new("missing")).await;
        assert!(matches!(missing, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_owned_posts_follow_session() {
        let backend = signed_in_backend().await;
        backend
            .add_post("someone@else.com", &PostDraft::new("theirs", "c"))
            .await;
        let mine = backend
            .create_post(&PostDraft::new("mine", "c"))
            .await
            .unwrap()
            .unwrap();

        let owned = backend.fetch_owned().await.unwrap();
        assert_eq!(owned, vec![mine.clone()]);

        let edited = backend
            .update_post(&mine.id, &PostDraft::new("edited", "c2"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(edited.title, "edited");
        assert_eq!(backend.fetch_post(&mine.id).await.unwrap().content, "c2");

        backend.delete_post(&mine.id).await.unwrap();
        assert!(backend.fetch_owned().await.unwrap().is_empty());
        assert_eq!(backend.post_count().await, 1);
    }
}
