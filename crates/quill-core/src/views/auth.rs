//! Sign-in and sign-up forms.

use crate::domain::Credentials;
use crate::error::ClientError;
use crate::ports::{AuthApi, SessionStore, USER_EMAIL_KEY};

use super::Route;

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub credentials: Credentials,
}

impl SignInForm {
    pub const SUCCESS_MESSAGE: &'static str = "Login successful!";

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(email, password),
        }
    }

    /// Log in and remember the returned email for this session.
    /// Returns where to navigate next.
    pub async fn submit(
        &self,
        auth: &dyn AuthApi,
        session: &dyn SessionStore,
    ) -> Result<Route, ClientError> {
        self.credentials.validate()?;
        let signed_in = auth.login(&self.credentials).await?;
        session.set(USER_EMAIL_KEY, &signed_in.email).await?;
        Ok(Route::Feed)
    }

    pub fn failure_message(err: &ClientError) -> String {
        match err {
            ClientError::InvalidCredentials => "Invalid credentials.".to_string(),
            ClientError::Validation(msg) => msg.clone(),
            _ => "An error occurred. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub credentials: Credentials,
    pub confirm_password: String,
}

impl SignUpForm {
    pub const SUCCESS_MESSAGE: &'static str = "Account created successfully!";

    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(email, password),
            confirm_password: confirm_password.into(),
        }
    }

    /// Register the account. Returns where to navigate next.
    pub async fn submit(&self, auth: &dyn AuthApi) -> Result<Route, ClientError> {
        self.credentials.validate()?;
        if self.credentials.password != self.confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match.".to_string(),
            ));
        }
        auth.register(&self.credentials).await?;
        Ok(Route::SignIn)
    }

    pub fn failure_message(err: &ClientError) -> String {
        match err {
            ClientError::AccountExists => "User already exists.".to_string(),
            ClientError::Validation(msg) => msg.clone(),
            _ => "Something went wrong. Try again.".to_string(),
        }
    }
}
