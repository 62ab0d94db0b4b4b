//! Sign-in form.

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::views::{Route, SignInForm};

use super::Next;
use crate::console::Console;
use crate::state::AppState;

pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> anyhow::Result<Next>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("== Sign In ==")?;
    console.say("Don't have an account? Enter 'signup' as the email. 'back' returns home.")?;

    loop {
        let Some(email) = console.prompt_required("Email: ").await? else {
            return Ok(Next::Quit);
        };
        match email.trim() {
            "signup" => return Ok(Next::Go(Route::SignUp)),
            "back" => return Ok(Next::Go(Route::Landing)),
            "quit" => return Ok(Next::Quit),
            _ => {}
        }
        let Some(password) = console.prompt_required("Password: ").await? else {
            return Ok(Next::Quit);
        };

        let form = SignInForm::new(email.trim(), password);
        match form
            .submit(state.auth.as_ref(), state.session.as_ref())
            .await
        {
            Ok(route) => {
                console.say(SignInForm::SUCCESS_MESSAGE)?;
                return Ok(Next::Go(route));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in failed");
                console.say(SignInForm::failure_message(&err))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{backend_with_posts, console, output, state};
    use quill_core::ports::SessionStore;

    #[tokio::test]
    async fn test_wrong_password_then_success() {
        let backend = backend_with_posts(0).await;
        let state = state(&backend);
        let mut console = console("ann@example.com\nwrong\nann@example.com\npw\n");

        let next = run(&state, &mut console).await.unwrap();

        assert_eq!(next, Next::Go(Route::Feed));
        let out = output(console);
        assert!(out.contains("Invalid credentials."));
        assert!(out.contains("Login successful!"));
        assert_eq!(backend.signed_in().await.as_deref(), Some("ann@example.com"));
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_navigate() {
        let backend = backend_with_posts(0).await;
        let state = state(&backend);
        let mut console = console("ann@example.com\nwrong\n");

        let next = run(&state, &mut console).await.unwrap();

        assert_eq!(next, Next::Quit);
        assert!(output(console).contains("Invalid credentials."));
        assert!(state.session.user_email().await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_locally() {
        let backend = backend_with_posts(0).await;
        let state = state(&backend);
        let mut console = console("ann\npw\nsignup\n");

        let next = run(&state, &mut console).await.unwrap();

        assert_eq!(next, Next::Go(Route::SignUp));
        assert!(output(console).contains("not a valid email address"));
    }
}
