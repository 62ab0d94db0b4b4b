//! # Quill Core
//!
//! The client-side domain of the Quill blogging app.
//! Entities, the ports every adapter implements, and the UI-agnostic view
//! models that drive each screen. No I/O lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod views;

pub use error::{ClientError, ClientResult};
