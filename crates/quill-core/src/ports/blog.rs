//! Blog post port.

use async_trait::async_trait;

use crate::domain::{FeedPage, PageRequest, Post, PostDraft, PostId};
use crate::error::ClientError;

/// Blog endpoints. Mutations return the record the backend echoed back, if any.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /blogs?page=&size=`
    async fn fetch_page(&self, request: PageRequest) -> Result<FeedPage, ClientError>;

    /// `GET /blogs/myblogs` - every post owned by the signed-in user, unpaginated.
    async fn fetch_owned(&self) -> Result<Vec<Post>, ClientError>;

    /// `GET /blogs/{id}`
    async fn fetch_post(&self, id: &PostId) -> Result<Post, ClientError>;

    /// `POST /blogs/create`
    async fn create_post(&self, draft: &PostDraft) -> Result<Option<Post>, ClientError>;

    /// `PUT /blogs/{id}`
    async fn update_post(&self, id: &PostId, draft: &PostDraft)
    -> Result<Option<Post>, ClientError>;

    /// `DELETE /blogs/{id}`
    async fn delete_post(&self, id: &PostId) -> Result<(), ClientError>;
}
