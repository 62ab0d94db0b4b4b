//! Landing page.

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::views::Route;

use super::{Command, Next, unavailable};
use crate::console::Console;

const BANNER: &str = "\
== Quill ==
Write, share and browse short blogs.

  signin   Sign In
  signup   Sign Up
  start    Create Your Blog
  quit     Leave";

pub async fn run<R, W>(console: &mut Console<R, W>) -> anyhow::Result<Next>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say(BANNER)?;
    loop {
        let Some(line) = console.prompt("quill> ").await? else {
            return Ok(Next::Quit);
        };
        if line.trim().eq_ignore_ascii_case("start") {
            return Ok(Next::Go(Route::SignIn));
        }
        match Command::parse(&line) {
            Command::Go(route) => return Ok(Next::Go(route)),
            Command::Quit => return Ok(Next::Quit),
            Command::Help => console.say(BANNER)?,
            other => console.say(unavailable(&other))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::console;

    #[tokio::test]
    async fn test_call_to_action_leads_to_sign_in() {
        let mut console = console("start\n");
        assert_eq!(run(&mut console).await.unwrap(), Next::Go(Route::SignIn));
    }

    #[tokio::test]
    async fn test_sign_up_link() {
        let mut console = console("bogus\nsignup\n");
        assert_eq!(run(&mut console).await.unwrap(), Next::Go(Route::SignUp));
    }
}
