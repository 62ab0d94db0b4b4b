//! reqwest-backed implementation of the auth and blog ports.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use quill_core::ClientError;
use quill_core::domain::{Credentials, FeedPage, PageRequest, Post, PostDraft, PostId};
use quill_core::ports::{AuthApi, BlogApi, SignedIn};
use quill_shared::dto::{LoginRequest, LoginResponse, RegisterUserRequest};
use quill_shared::{BlogPageResponse, BlogPayload, BlogResponse};

use super::HttpClientConfig;
use super::convert::{into_feed_page, into_post};

/// Client for the blog backend.
///
/// Keeps a cookie jar, so the session cookie set by `/auth/login` is sent
/// with every later request.
pub struct HttpBlogClient {
    api_root: String,
    http: reqwest::Client,
}

impl HttpBlogClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, ClientError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            ClientError::Validation(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            api_root: config.api_root(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Send the request; non-2xx statuses become typed errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            body = %truncate_for_log(&body),
            "Backend rejected request"
        );
        Err(ClientError::from_status(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Mutation responses may or may not echo the record back.
    async fn echoed_post(response: Response) -> Option<Post> {
        let body = response.text().await.ok()?;
        match serde_json::from_str::<BlogResponse>(&body) {
            Ok(dto) => Some(into_post(dto)),
            Err(e) => {
                tracing::debug!(error = %e, "Response carried no post record");
                None
            }
        }
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Transport("request timed out".to_string())
    } else {
        ClientError::Transport(err.to_string())
    }
}

// Error bodies are short plain-text messages; keep log lines bounded anyway.
fn truncate_for_log(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((cut, _)) => &body[..cut],
        None => body,
    }
}

#[async_trait]
impl AuthApi for HttpBlogClient {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ClientError> {
        let body = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        let request = self.http.post(self.url("/auth/login")).json(&body);
        let response = match self.send(request).await {
            Ok(response) => response,
            Err(ClientError::Unauthenticated(_)) => return Err(ClientError::InvalidCredentials),
            Err(err) => return Err(err),
        };
        let login: LoginResponse = Self::decode(response).await?;
        tracing::info!(email = %login.email, "Signed in");
        Ok(SignedIn { email: login.email })
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let body = RegisterUserRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        let request = self.http.post(self.url("/auth/register")).json(&body);
        match self.send(request).await {
            Ok(_) => Ok(()),
            Err(ClientError::Validation(_)) => Err(ClientError::AccountExists),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl BlogApi for HttpBlogClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<FeedPage, ClientError> {
        let builder = self
            .http
            .get(self.url("/blogs"))
            .query(&[("page", request.page), ("size", request.size)]);
        let response = self.send(builder).await?;
        let page: BlogPageResponse = Self::decode(response).await?;
        Ok(into_feed_page(page))
    }

    async fn fetch_owned(&self) -> Result<Vec<Post>, ClientError> {
        let response = self.send(self.http.get(self.url("/blogs/myblogs"))).await?;
        let blogs: Vec<BlogResponse> = Self::decode(response).await?;
        Ok(blogs.into_iter().map(into_post).collect())
    }

    async fn fetch_post(&self, id: &PostId) -> Result<Post, ClientError> {
        let response = self
            .send(self.http.get(self.url(&format!("/blogs/{id}"))))
            .await?;
        let blog: BlogResponse = Self::decode(response).await?;
        Ok(into_post(blog))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Option<Post>, ClientError> {
        let body = BlogPayload {
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        let request = self.http.post(self.url("/blogs/create")).json(&body);
        let response = self.send(request).await?;
        Ok(Self::echoed_post(response).await)
    }

    async fn update_post(
        &self,
        id: &PostId,
        draft: &PostDraft,
    ) -> Result<Option<Post>, ClientError> {
        let body = BlogPayload {
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        let request = self
            .http
            .put(self.url(&format!("/blogs/{id}")))
            .json(&body);
        let response = self.send(request).await?;
        Ok(Self::echoed_post(response).await)
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(&format!("/blogs/{id}"))))
            .await?;
        Ok(())
    }
}
