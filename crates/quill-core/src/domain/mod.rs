//! Domain entities - the objects the client reads and sends.

mod credentials;
mod page;
mod post;

pub use credentials::Credentials;
pub use page::{FEED_PAGE_SIZE, FeedPage, PageRequest};
pub use post::{Post, PostDraft, PostId};
