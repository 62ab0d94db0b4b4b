use serde::{Deserialize, Serialize};

use super::Post;

/// Number of posts requested per feed page.
pub const FEED_PAGE_SIZE: u32 = 4;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn feed(page: u32) -> Self {
        Self {
            page,
            size: FEED_PAGE_SIZE,
        }
    }
}

/// One page of the public feed, as answered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub total_pages: u32,
    /// The backend's own idea of which page this is. Adopted over the requested index.
    pub current_page: u32,
    pub total_items: Option<u64>,
}
