//! Paginated public feed.

use crate::domain::{FeedPage, PageRequest, Post, PostDraft, PostId};
use crate::error::ClientError;
use crate::ports::BlogApi;

use super::ExpandState;

/// Where the most recent fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Fetching,
    Loaded,
    /// The last fetch failed; the previously rendered page is still shown.
    Failed(ClientError),
}

/// Handle for one issued page fetch. Only the most recently issued ticket
/// is allowed to change the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    generation: u64,
    page: u32,
}

impl PageTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::feed(self.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer fetch was issued after this one; the response was dropped.
    Stale,
    Failed,
}

/// State of the "All Blogs" screen.
#[derive(Debug, Clone)]
pub struct FeedView {
    posts: Vec<Post>,
    page: u32,
    total_pages: u32,
    total_items: Option<u64>,
    generation: u64,
    status: FetchStatus,
    expand: ExpandState,
    draft: PostDraft,
    composing: bool,
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            page: 0,
            total_pages: 1,
            total_items: None,
            generation: 0,
            status: FetchStatus::Idle,
            expand: ExpandState::default(),
            draft: PostDraft::default(),
            composing: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> Option<u64> {
        self.total_items
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

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            u64::from(self.page) + 1,
            self.total_pages.max(1)
        )
    }

    /// Issue a fetch for `page`. Any ticket handed out earlier becomes stale.
    pub fn begin_fetch(&mut self, page: u32) -> PageTicket {
        self.generation += 1;
        self.status = FetchStatus::Fetching;
        PageTicket {
            generation: self.generation,
            page,
        }
    }

    /// Fold the response for `ticket` into the view.
    pub fn apply(
        &mut self,
        ticket: PageTicket,
        result: Result<FeedPage, ClientError>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(page) => {
                self.posts = page.posts;
                self.total_pages = page.total_pages;
                self.page = page.current_page;
                self.total_items = page.total_items;
                self.status = FetchStatus::Loaded;
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.status = FetchStatus::Failed(err);
                ApplyOutcome::Failed
            }
        }
    }

    /// Fetch `page` and apply it.
    pub async fn load(&mut self, api: &dyn BlogApi, page: u32) -> ApplyOutcome {
        let ticket = self.begin_fetch(page);
        let result = api.fetch_page(ticket.request()).await;
        self.apply(ticket, result)
    }

    /// Re-fetch the page currently shown.
    pub async fn refresh(&mut self, api: &dyn BlogApi) -> ApplyOutcome {
        self.load(api, self.page).await
    }

    /// Go one page back. `None` when already on the first page.
    pub async fn prev(&mut self, api: &dyn BlogApi) -> Option<ApplyOutcome> {
        if !self.can_prev() {
            return None;
        }
        Some(self.load(api, self.page - 1).await)
    }

    /// Go one page forward. `None` when already on the last page.
    pub async fn next(&mut self, api: &dyn BlogApi) -> Option<ApplyOutcome> {
        let page = self.page.checked_add(1).filter(|_| self.can_next())?;
        Some(self.load(api, page).await)
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn open_compose(&mut self) {
        self.composing = true;
    }

    /// Hide the compose form. Whatever was typed is kept for next time.
    pub fn close_compose(&mut self) {
        self.composing = false;
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PostDraft {
        &mut self.draft
    }

    /// Create a post from the compose draft.
    ///
    /// Nothing is sent if the draft is incomplete. On success the current
    /// page is re-fetched, the draft is cleared and the form closes; on
    /// failure the form stays as it was.
    pub async fn submit_post(&mut self, api: &dyn BlogApi) -> Result<(), ClientError> {
        self.draft.validate()?;
        api.create_post(&self.draft).await?;
        self.refresh(api).await;
        self.draft.clear();
        self.composing = false;
        Ok(())
    }

    /// User-facing text for a failed `submit_post`.
    pub fn create_failure_message(err: &ClientError) -> String {
        match err {
            e if e.is_auth_failure() => "Failed to add blog. Please login first.".to_string(),
            ClientError::Validation(msg) => msg.clone(),
            other => format!("Failed to add blog: {other}"),
        }
    }
}
