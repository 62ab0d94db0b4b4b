//! The signed-in user's own posts: keyed store plus edit/delete flows.

use std::collections::HashMap;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::ClientError;
use crate::ports::BlogApi;

use super::{ExpandState, FetchStatus};

/// Posts keyed by id, iterated in the order the backend listed them.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    order: Vec<PostId>,
    by_id: HashMap<PostId, Post>,
}

impl PostStore {
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut store = Self::default();
        store.replace_all(posts);
        store
    }

    /// Drop everything and take `posts` as the new contents.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.order.clear();
        self.by_id.clear();
        for post in posts {
            self.upsert(post);
        }
    }

    /// Replace the record with the same id in place, or append it.
    pub fn upsert(&mut self, post: Post) {
        if !self.by_id.contains_key(&post.id) {
            self.order.push(post.id.clone());
        }
        self.by_id.insert(post.id.clone(), post);
    }

    /// Overwrite `title`/`content` of an existing record.
    pub fn merge_draft(&mut self, id: &PostId, draft: &PostDraft) -> Option<&Post> {
        let post = self.by_id.get_mut(id)?;
        *post = post.with_draft(draft);
        Some(&*post)
    }

    pub fn remove(&mut self, id: &PostId) -> Option<Post> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.by_id.get(id)
    }

    /// The `index`-th post in display order.
    pub fn nth(&self, index: usize) -> Option<&Post> {
        self.order.get(index).and_then(|id| self.by_id.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// An open editor: the post being edited and a detached copy of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: PostId,
    pub draft: PostDraft,
}

/// State of the "My Blogs" screen.
#[derive(Debug, Clone)]
pub struct MyBlogsView {
    store: PostStore,
    status: FetchStatus,
    expand: ExpandState,
    editor: Option<EditSession>,
    last_error: Option<ClientError>,
}

impl Default for MyBlogsView {
    fn default() -> Self {
        Self::new()
    }
}

impl MyBlogsView {
    pub fn new() -> Self {
        Self {
            store: PostStore::default(),
            status: FetchStatus::Idle,
            expand: ExpandState::default(),
            editor: None,
            last_error: None,
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn expand(&self) -> &ExpandState {
        &self.expand
    }

    pub fn toggle(&mut self, id: &PostId) {
        self.expand.toggle(id);
    }

    /// Error from the most recent failed operation, until the next success.
    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Fetch every owned post, replacing the store on success.
    pub async fn load(&mut self, api: &dyn BlogApi) -> Result<(), ClientError> {
        self.status = FetchStatus::Fetching;
        match api.fetch_owned().await {
            Ok(posts) => {
                self.store.replace_all(posts);
                self.status = FetchStatus::Loaded;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.status = FetchStatus::Failed(err.clone());
                Err(self.fail(err))
            }
        }
    }

    pub fn editor(&self) -> Option<&EditSession> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditSession> {
        self.editor.as_mut()
    }

    /// Open the editor on `id`, pre-filled with a copy of its current fields.
    pub fn begin_edit(&mut self, id: &PostId) -> Result<&mut EditSession, ClientError> {
        let post = self
            .store
            .get(id)
            .ok_or_else(|| ClientError::NotFound(format!("post {id}")))?;
        let session = EditSession {
            id: id.clone(),
            draft: PostDraft::from(post),
        };
        Ok(self.editor.insert(session))
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Send the open editor's draft. On success the edited title and content
    /// (as echoed by the server, else as typed) are merged into the cached
    /// post and the editor closes. Every other field keeps its cached value
    /// until the next load. On failure the editor stays open and the error
    /// is kept.
    pub async fn submit_edit(&mut self, api: &dyn BlogApi) -> Result<(), ClientError> {
        let Some(session) = self.editor.clone() else {
            return Err(self.fail(ClientError::Validation(
                "No post is being edited".to_string(),
            )));
        };
        if let Err(err) = session.draft.validate() {
            return Err(self.fail(err));
        }

        match api.update_post(&session.id, &session.draft).await {
            Ok(Some(record)) if record.id == session.id => {
                let echoed = PostDraft::from(&record);
                self.store.merge_draft(&session.id, &echoed);
            }
            Ok(_) => {
                self.store.merge_draft(&session.id, &session.draft);
            }
            Err(err) => return Err(self.fail(err)),
        }
        self.editor = None;
        self.last_error = None;
        Ok(())
    }

    /// Delete `id` on the backend, then drop it locally.
    pub async fn delete(&mut self, api: &dyn BlogApi, id: &PostId) -> Result<(), ClientError> {
        if let Err(err) = api.delete_post(id).await {
            return Err(self.fail(err));
        }
        self.forget(id);
        self.last_error = None;
        Ok(())
    }

    /// Re-read one post from the backend and replace the cached copy with it.
    /// A post the backend no longer has is dropped from the list.
    pub async fn reload_post(&mut self, api: &dyn BlogApi, id: &PostId) -> Result<(), ClientError> {
        match api.fetch_post(id).await {
            Ok(post) if &post.id == id => {
                self.store.upsert(post);
                self.last_error = None;
                Ok(())
            }
            Ok(other) => Err(self.fail(ClientError::Decode(format!(
                "asked for post {id}, got {}",
                other.id
            )))),
            Err(err) => {
                if matches!(err, ClientError::NotFound(_)) {
                    self.forget(id);
                }
                Err(self.fail(err))
            }
        }
    }

    fn forget(&mut self, id: &PostId) {
        self.store.remove(id);
        if self.expand.is_expanded(id) {
            self.expand.collapse();
        }
        if self.editor.as_ref().is_some_and(|s| &s.id == id) {
            self.editor = None;
        }
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        self.last_error = Some(err.clone());
        err
    }
}
