//! Scripted port doubles for view-model tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Credentials, FeedPage, PageRequest, Post, PostDraft, PostId};
use crate::error::ClientError;
use crate::ports::{AuthApi, BlogApi, SessionStore, SignedIn};

pub(crate) fn post(id: &str, title: &str, content: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        author: Some("Ann".to_string()),
        author_email: Some("ann@example.com".to_string()),
        created_at: Post::parse_timestamp("2024-05-01T10:00:00"),
    }
}

pub(crate) fn feed_page(posts: Vec<Post>, total_pages: u32, current_page: u32) -> FeedPage {
    FeedPage {
        total_items: Some(posts.len() as u64),
        posts,
        total_pages,
        current_page,
    }
}

/// Blog API that answers from scripted results and records every call.
pub(crate) struct FakeBlogApi {
    pages: Mutex<VecDeque<Result<FeedPage, ClientError>>>,
    owned: Mutex<Result<Vec<Post>, ClientError>>,
    single: Mutex<Option<Result<Post, ClientError>>>,
    create: Mutex<Result<Option<Post>, ClientError>>,
    update: Mutex<Result<Option<Post>, ClientError>>,
    delete: Mutex<Result<(), ClientError>>,
    calls: Mutex<Vec<String>>,
}

impl Default for FakeBlogApi {
    fn default() -> Self {
        Self {
            pages: Mutex::new(VecDeque::new()),
            owned: Mutex::new(Ok(Vec::new())),
            single: Mutex::new(None),
            create: Mutex::new(Ok(None)),
            update: Mutex::new(Ok(None)),
            delete: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBlogApi {
    pub(crate) fn push_page(&self, page: Result<FeedPage, ClientError>) {
        self.pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn set_owned(&self, owned: Result<Vec<Post>, ClientError>) {
        *self.owned.lock().unwrap() = owned;
    }

    /// Answer for `fetch_post`. Unset means every id is `NotFound`.
    pub(crate) fn set_post(&self, result: Result<Post, ClientError>) {
        *self.single.lock().unwrap() = Some(result);
    }

    pub(crate) fn set_create(&self, result: Result<Option<Post>, ClientError>) {
        *self.create.lock().unwrap() = result;
    }

    pub(crate) fn set_update(&self, result: Result<Option<Post>, ClientError>) {
        *self.update.lock().unwrap() = result;
    }

    pub(crate) fn set_delete(&self, result: Result<(), ClientError>) {
        *self.delete.lock().unwrap() = result;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BlogApi for FakeBlogApi {
    async fn fetch_page(&self, request: PageRequest) -> Result<FeedPage, ClientError> {
        self.record(format!("fetch_page {} {}", request.page, request.size));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted page".into())))
    }

    async fn fetch_owned(&self) -> Result<Vec<Post>, ClientError> {
        self.record("fetch_owned".to_string());
        self.owned.lock().unwrap().clone()
    }

    async fn fetch_post(&self, id: &PostId) -> Result<Post, ClientError> {
        self.record(format!("fetch_post {id}"));
        self.single
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(ClientError::NotFound(id.to_string())))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Option<Post>, ClientError> {
        self.record(format!("create {}", draft.title));
        self.create.lock().unwrap().clone()
    }

    async fn update_post(
        &self,
        id: &PostId,
        draft: &PostDraft,
    ) -> Result<Option<Post>, ClientError> {
        self.record(format!("update {id} {}", draft.title));
        self.update.lock().unwrap().clone()
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ClientError> {
        self.record(format!("delete {id}"));
        self.delete.lock().unwrap().clone()
    }
}

/// Auth API answering every call with a fixed result.
pub(crate) struct FakeAuthApi {
    pub(crate) login: Result<SignedIn, ClientError>,
    pub(crate) register: Result<(), ClientError>,
    calls: Mutex<Vec<String>>,
}

impl FakeAuthApi {
    pub(crate) fn new(
        login: Result<SignedIn, ClientError>,
        register: Result<(), ClientError>,
    ) -> Self {
        Self {
            login,
            register,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("login {}", credentials.email));
        self.login.clone()
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("register {}", credentials.email));
        self.register.clone()
    }
}

#[derive(Default)]
pub(crate) struct FakeSession {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl SessionStore for FakeSession {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
