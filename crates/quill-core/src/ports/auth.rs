//! Authentication port.

use async_trait::async_trait;

use crate::domain::Credentials;
use crate::error::ClientError;

/// What a successful login hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub email: String,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`. A rejected password is `ClientError::InvalidCredentials`.
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ClientError>;

    /// `POST /auth/register`. A taken email is `ClientError::AccountExists`.
    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError>;
}
