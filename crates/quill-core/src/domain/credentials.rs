use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Email/password pair submitted by the sign-in and sign-up forms.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Required-field and email-shape check, before anything is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.email.is_empty() {
            return Err(ClientError::Validation("Email is required".to_string()));
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(ClientError::Validation(format!(
                    "'{}' is not a valid email address",
                    self.email
                )));
            }
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation("Password is required".to_string()));
        }
        Ok(())
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Credentials::new("a@b.io", "pw").validate().is_ok());
        assert!(Credentials::new("", "pw").validate().is_err());
        assert!(Credentials::new("nobody", "pw").validate().is_err());
        assert!(Credentials::new("@b.io", "pw").validate().is_err());
        assert!(Credentials::new("a@b.io", "").validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.io", "hunter2"));
        assert!(rendered.contains("a@b.io"));
        assert!(!rendered.contains("hunter2"));
    }
}
