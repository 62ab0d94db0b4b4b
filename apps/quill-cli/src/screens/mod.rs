//! Screens and the navigator that moves between them.

mod feed;
mod landing;
mod my_blogs;
mod sign_in;
mod sign_up;

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::views::Route;

use crate::console::Console;
use crate::state::AppState;

/// What a screen wants to happen once it is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Go(Route),
    Quit,
}

/// A line typed at a screen's command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PrevPage,
    Open(usize),
    Edit(usize),
    Delete(usize),
    Create,
    Refresh,
    Reload(usize),
    Go(Route),
    Logout,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Help;
        };
        let number = words.next().and_then(|n| n.parse::<usize>().ok());

        match (head.to_lowercase().as_str(), number) {
            ("n" | "next", _) => Command::NextPage,
            ("p" | "prev", _) => Command::PrevPage,
            ("o" | "open", Some(n)) => Command::Open(n),
            ("e" | "edit", Some(n)) => Command::Edit(n),
            ("d" | "delete", Some(n)) => Command::Delete(n),
            ("c" | "new" | "create", _) => Command::Create,
            ("r" | "refresh", Some(n)) => Command::Reload(n),
            ("r" | "refresh", None) => Command::Refresh,
            ("mine" | "myblogs", _) => Command::Go(Route::MyBlogs),
            ("all" | "blogs", _) => Command::Go(Route::Feed),
            ("signin" | "login", _) => Command::Go(Route::SignIn),
            ("signup" | "register", _) => Command::Go(Route::SignUp),
            ("home" | "back", _) => Command::Go(Route::Landing),
            ("logout", _) => Command::Logout,
            ("h" | "help" | "?", _) => Command::Help,
            ("q" | "quit" | "exit", _) => Command::Quit,
            (path, _) if path.starts_with('/') => match path.parse::<Route>() {
                Ok(route) => Command::Go(route),
                Err(_) => Command::Unknown(line.trim().to_string()),
            },
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

/// Reply for a command the current screen does not handle.
fn unavailable(command: &Command) -> String {
    match command {
        Command::Unknown(text) => format!("Unknown command '{text}'. Type 'help'."),
        _ => "That does not work on this screen. Type 'help'.".to_string(),
    }
}

/// Run screens starting at `start` until one asks to quit or input ends.
pub async fn run<R, W>(
    state: &AppState,
    console: &mut Console<R, W>,
    start: Route,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut route = start;
    loop {
        tracing::debug!(%route, "Entering screen");
        let next = match route {
            Route::Landing => landing::run(console).await?,
            Route::SignIn => sign_in::run(state, console).await?,
            Route::SignUp => sign_up::run(state, console).await?,
            Route::Feed => feed::run(state, console).await?,
            Route::MyBlogs => my_blogs::run(state, console).await?,
        };
        match next {
            Next::Go(to) => route = to,
            Next::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use tokio::io::BufReader;

    use quill_core::domain::PostDraft;
    use quill_infra::InMemoryBlogBackend;

    use crate::console::Console;
    use crate::state::AppState;

    pub(crate) type TestConsole<'a> = Console<BufReader<&'a [u8]>, Vec<u8>>;

    pub(crate) fn console(input: &str) -> TestConsole<'_> {
        Console::new(BufReader::new(input.as_bytes()), Vec::new())
    }

    pub(crate) fn output(console: TestConsole<'_>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    /// Backend with `ann@example.com`/`pw` and `posts` posts written by Ann.
    pub(crate) async fn backend_with_posts(posts: usize) -> Arc<InMemoryBlogBackend> {
        let backend = Arc::new(InMemoryBlogBackend::new());
        backend.add_account("ann@example.com", "pw").await;
        for n in 1..=posts {
            backend
                .add_post(
                    "ann@example.com",
                    &PostDraft::new(format!("Post {n}"), format!("Content {n}")),
                )
                .await;
        }
        backend
    }

    pub(crate) fn state(backend: &Arc<InMemoryBlogBackend>) -> AppState {
        AppState::in_memory(backend.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{backend_with_posts, console, output, state};
    use super::*;
    use quill_core::ports::SessionStore;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("n"), Command::NextPage);
        assert_eq!(Command::parse("  open 3 "), Command::Open(3));
        assert_eq!(Command::parse("E 2"), Command::Edit(2));
        assert_eq!(Command::parse("r"), Command::Refresh);
        assert_eq!(Command::parse("r 2"), Command::Reload(2));
        assert_eq!(Command::parse("/myblogs"), Command::Go(Route::MyBlogs));
        assert_eq!(Command::parse(""), Command::Help);
        assert_eq!(
            Command::parse("open"),
            Command::Unknown("open".to_string())
        );
        assert_eq!(
            Command::parse("/nowhere"),
            Command::Unknown("/nowhere".to_string())
        );
    }

    #[tokio::test]
    async fn test_sign_in_then_visit_my_blogs() {
        let backend = backend_with_posts(2).await;
        let state = state(&backend);
        let mut console = console("signin\nann@example.com\npw\nmine\nq\n");

        run(&state, &mut console, Route::Landing).await.unwrap();

        let out = output(console);
        assert!(out.contains("Login successful!"));
        assert!(out.contains("== All Blogs =="));
        assert!(out.contains("== My Blogs =="));
        assert!(out.contains("Post 2"));
        assert_eq!(
            state.session.user_email().await.as_deref(),
            Some("ann@example.com")
        );
    }

    #[tokio::test]
    async fn test_input_end_quits() {
        let backend = backend_with_posts(0).await;
        let state = state(&backend);
        let mut console = console("");

        run(&state, &mut console, Route::Feed).await.unwrap();

        assert!(output(console).contains("== All Blogs =="));
    }
}
