use async_trait::async_trait;

use crate::error::ClientError;

/// Key under which the signed-in user's email is kept.
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Session storage - ephemeral key/value strings that live as long as the client.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    async fn remove(&self, key: &str) -> Result<(), ClientError>;

    /// The signed-in user's email, if a login happened in this session.
    async fn user_email(&self) -> Option<String> {
        self.get(USER_EMAIL_KEY).await
    }
}
