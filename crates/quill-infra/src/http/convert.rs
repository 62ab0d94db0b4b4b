//! Wire DTO to domain conversions.

use quill_core::domain::{FeedPage, Post, PostId};
use quill_shared::{BlogPageResponse, BlogResponse};

pub(crate) fn into_post(dto: BlogResponse) -> Post {
    let created_at = dto.created_at.as_deref().and_then(|raw| {
        let parsed = Post::parse_timestamp(raw);
        if parsed.is_none() {
            tracing::warn!(id = %dto.id, raw, "Unparseable createdAt, ignoring");
        }
        parsed
    });

    Post {
        id: PostId::new(dto.id),
        title: dto.title.unwrap_or_default(),
        content: dto.content.unwrap_or_default(),
        author: dto.author,
        author_email: dto.author_email,
        created_at,
    }
}

pub(crate) fn into_feed_page(dto: BlogPageResponse) -> FeedPage {
    FeedPage {
        posts: dto.blogs.into_iter().map(into_post).collect(),
        total_pages: dto.total_pages,
        current_page: dto.current_page,
        total_items: dto.total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_defaults() {
        let post = into_post(BlogResponse {
            id: "abc".to_string(),
            created_at: Some("not a date".to_string()),
            ..BlogResponse::default()
        });
        assert_eq!(post.id.as_str(), "abc");
        assert!(post.title.is_empty());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_page_keeps_server_index() {
        let page = into_feed_page(BlogPageResponse {
            blogs: vec![BlogResponse {
                id: "a".to_string(),
                title: Some("A".to_string()),
                created_at: Some("2024-05-01T10:00:00.5".to_string()),
                ..BlogResponse::default()
            }],
            total_pages: 2,
            current_page: 1,
            total_items: None,
        });
        assert_eq!(page.current_page, 1);
        assert_eq!(page.posts[0].title, "A");
        assert!(page.posts[0].created_at.is_some());
    }
}
