use std::borrow::Cow;

use crate::domain::{Post, PostId};

use super::preview;

/// Which post, if any, is expanded. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: Option<PostId>,
}

impl ExpandState {
    /// Expand `id`, or collapse it if it already is.
    pub fn toggle(&mut self, id: &PostId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &PostId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&PostId> {
        self.expanded.as_ref()
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Text to render for `post` in its current state.
    pub fn body<'a>(&self, post: &'a Post) -> Cow<'a, str> {
        if self.is_expanded(&post.id) {
            Cow::Borrowed(post.content.as_str())
        } else {
            Cow::Owned(preview(&post.content))
        }
    }
}
