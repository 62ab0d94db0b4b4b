//! Sign-up form.

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::views::{Route, SignUpForm};

use super::Next;
use crate::console::Console;
use crate::state::AppState;

pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> anyhow::Result<Next>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("== Create an Account ==")?;
    console.say("Already registered? Enter 'signin' as the email. 'back' returns home.")?;

    loop {
        let Some(email) = console.prompt_required("Email: ").await? else {
            return Ok(Next::Quit);
        };
        match email.trim() {
            "signin" => return Ok(Next::Go(Route::SignIn)),
            "back" => return Ok(Next::Go(Route::Landing)),
            "quit" => return Ok(Next::Quit),
            _ => {}
        }
        let Some(password) = console.prompt_required("Password: ").await? else {
            return Ok(Next::Quit);
        };
        let Some(confirm) = console.prompt_required("Confirm Password: ").await? else {
            return Ok(Next::Quit);
        };

        let form = SignUpForm::new(email.trim(), password, confirm);
        match form.submit(state.auth.as_ref()).await {
            Ok(route) => {
                console.say(SignUpForm::SUCCESS_MESSAGE)?;
                return Ok(Next::Go(route));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-up failed");
                console.say(SignUpForm::failure_message(&err))?;
            }
        }
    }
}
