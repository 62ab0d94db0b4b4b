use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Opaque, backend-assigned post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Post entity - a single blog entry as the backend reports it.
///
/// Only `title` and `content` are ever written by the client; the remaining
/// fields are backend-assigned and treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Post {
    /// Name shown on a card. Falls back to the author's email, since the
    /// backend does not always fill in `author`.
    pub fn byline(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.is_empty())
            .or(self.author_email.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn display_date(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Copy with `title`/`content` taken from the draft and every other field kept.
    pub fn with_draft(&self, draft: &PostDraft) -> Self {
        Self {
            title: draft.title.clone(),
            content: draft.content.clone(),
            ..self.clone()
        }
    }

    /// Parse a wire timestamp: an ISO-8601 local date-time (what the backend
    /// emits) or a full RFC 3339 timestamp, normalized to UTC.
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|ts| ts.naive_utc())
            })
    }
}

/// The author-editable part of a post; the only payload sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Required-field check: both fields must be non-empty.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.is_empty() {
            return Err(ClientError::Validation("Title is required".to_string()));
        }
        if self.content.is_empty() {
            return Err(ClientError::Validation("Content is required".to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.content.clone())
    }
}
