//! Ports - trait definitions for external dependencies.
//! The HTTP client, the in-memory backend and the session storage implement these.

mod auth;
mod blog;
mod session;

pub use auth::{AuthApi, SignedIn};
pub use blog::BlogApi;
pub use session::{SessionStore, USER_EMAIL_KEY};
