//! View models - UI-agnostic state for each screen.
//!
//! A front end renders these and forwards user intent to their operations;
//! all backend traffic goes through the ports.

mod auth;
mod expand;
mod feed;
mod owned;
mod preview;
mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{SignInForm, SignUpForm};
pub use expand::ExpandState;
pub use feed::{ApplyOutcome, FeedView, FetchStatus, PageTicket};
pub use owned::{EditSession, MyBlogsView, PostStore};
pub use preview::{PREVIEW_CHARS, preview};
pub use router::{Route, RouteError};
