//! Client-level error types.

use thiserror::Error;

/// Every failure a backend call or a local form check can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Login was rejected (401 on `/auth/login`).
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Registration was rejected because the email is taken (400 on `/auth/register`).
    #[error("User already exists.")]
    AccountExists,

    /// A protected endpoint answered 401: there is no signed-in session.
    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected input, either by a local form check or a 400 from the backend.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response carried a body that could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Session storage failed: {0}")]
    Session(String),
}

impl ClientError {
    /// Map a non-success HTTP status and its body onto the generic taxonomy.
    ///
    /// Endpoint-specific meanings (401 on login, 400 on register) are applied
    /// by the caller on top of this.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let detail = body.into();
        match status {
            400 => ClientError::Validation(detail),
            401 => ClientError::Unauthenticated(detail),
            403 => ClientError::Forbidden(detail),
            404 => ClientError::NotFound(detail),
            _ => ClientError::Server { status, detail },
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthenticated(_) | ClientError::InvalidCredentials
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
