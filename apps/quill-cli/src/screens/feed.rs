//! "All Blogs": the paginated public feed and the compose form.

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::views::{ApplyOutcome, FeedView, Route};

use super::{Command, Next, unavailable};
use crate::console::Console;
use crate::render;
use crate::state::AppState;

const HELP: &str = "\
Commands:
  n, p          next / previous page
  o N           expand or collapse post N
  c             write a new blog
  r             refresh this page
  mine          go to My Blogs
  logout        log out
  q             quit";

pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> anyhow::Result<Next>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = FeedView::new();
    if let Some(email) = state.session.user_email().await {
        console.say(format!("Signed in as {email}"))?;
    }
    report(view.load(state.blogs.as_ref(), 0).await, &view);
    console.say(render::feed(&view))?;

    loop {
        let Some(line) = console.prompt("blogs> ").await? else {
            return Ok(Next::Quit);
        };
        match Command::parse(&line) {
            Command::NextPage => match view.next(state.blogs.as_ref()).await {
                Some(outcome) => report(outcome, &view),
                None => {
                    console.say("Already on the last page.")?;
                    continue;
                }
            },
            Command::PrevPage => match view.prev(state.blogs.as_ref()).await {
                Some(outcome) => report(outcome, &view),
                None => {
                    console.say("Already on the first page.")?;
                    continue;
                }
            },
            Command::Open(n) => {
                let Some(id) = n
                    .checked_sub(1)
                    .and_then(|i| view.posts().get(i))
                    .map(|post| post.id.clone())
                else {
                    console.say(format!("There is no post {n} on this page."))?;
                    continue;
                };
                view.toggle(&id);
            }
            Command::Create => {
                if !compose(state, console, &mut view).await? {
                    return Ok(Next::Quit);
                }
            }
            Command::Refresh => report(view.refresh(state.blogs.as_ref()).await, &view),
            Command::Go(Route::Feed) => {}
            Command::Go(route) => return Ok(Next::Go(route)),
            Command::Logout => {
                console.say("Logged out successfully!")?;
                return Ok(Next::Go(Route::SignIn));
            }
            Command::Help => {
                console.say(HELP)?;
                continue;
            }
            Command::Quit => return Ok(Next::Quit),
            other => {
                console.say(unavailable(&other))?;
                continue;
            }
        }
        console.say(render::feed(&view))?;
    }
}

/// Fill in the compose draft and submit it. After a failure the form stays
/// open until the user stops retrying; the draft is kept either way.
/// `false` once input runs out.
async fn compose<R, W>(
    state: &AppState,
    console: &mut Console<R, W>,
    view: &mut FeedView,
) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    view.open_compose();
    console.say("-- New blog --")?;

    while view.is_composing() {
        let Some(title) = console.prompt_prefilled("Title", &view.draft().title).await? else {
            return Ok(false);
        };
        view.draft_mut().title = title;
        let Some(content) = console
            .prompt_prefilled("Content", &view.draft().content)
            .await?
        else {
            return Ok(false);
        };
        view.draft_mut().content = content;

        match view.submit_post(state.blogs.as_ref()).await {
            Ok(()) => {
                tracing::info!("Blog created");
                console.say("Blog added successfully!")?;
            }
            Err(err) => {
                tracing::error!(error = %err, "Error creating blog");
                console.say(FeedView::create_failure_message(&err))?;

                let retry = console.prompt("Try again? [y/N] ").await?;
                if !matches!(retry.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
                    view.close_compose();
                    return Ok(retry.is_some());
                }
            }
        }
    }
    Ok(true)
}

fn report(outcome: ApplyOutcome, view: &FeedView) {
    match outcome {
        ApplyOutcome::Applied => {
            tracing::debug!(page = view.page(), total = view.total_pages(), "Feed page loaded");
        }
        ApplyOutcome::Stale => tracing::debug!("Dropped a stale feed page"),
        ApplyOutcome::Failed => tracing::error!(status = ?view.status(), "Error fetching blogs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{backend_with_posts, console, output, state};
    use quill_core::domain::Credentials;

    #[tokio::test]
    async fn test_paging_through_the_feed() {
        let backend = backend_with_posts(5).await;
        let state = state(&backend);
        let mut console = console("p\nn\nn\nq\n");

        let next = run(&state, &mut console).await.unwrap();

        assert_eq!(next, Next::Quit);
        let out = output(console);
        assert!(out.contains("Page 1 of 2"));
        assert!(out.contains("Already on the first page."));
        assert!(out.contains("Page 2 of 2"));
        assert!(out.contains("Already on the last page."));
    }

    #[tokio::test]
    async fn test_create_after_sign_in() {
        let backend = backend_with_posts(5).await;
        let state = state(&backend);
        state
            .auth
            .login(&Credentials::new("ann@example.com", "pw"))
            .await
            .unwrap();
        let mut console = console("c\n\nFresh title\nFresh content\nq\n");

        run(&state, &mut console).await.unwrap();

        let out = output(console);
        assert!(out.contains("Please fill out this field."));
        assert!(out.contains("Blog added successfully!"));
        assert_eq!(backend.post_count().await, 6);
    }

    #[tokio::test]
    async fn test_failed_create_offers_retry_and_keeps_draft() {
        let backend = backend_with_posts(1).await;
        let state = state(&backend);
        let mut console = console("c\nKept\nBody\ny\n\n\n\nc\n\n\nn\nq\n");

        run(&state, &mut console).await.unwrap();

        let out = output(console);
        assert_eq!(
            out.matches("Failed to add blog. Please login first.").count(),
            3
        );
        assert_eq!(out.matches("Title [Kept]: ").count(), 2);
        assert_eq!(out.matches("Try again? [y/N] ").count(), 3);
        assert_eq!(backend.post_count().await, 1);
    }

    #[tokio::test]
    async fn test_open_toggles_a_card() {
        let backend = backend_with_posts(2).await;
        let state = state(&backend);
        let mut console = console("o 1\no 9\nlogout\n");

        let next = run(&state, &mut console).await.unwrap();

        assert_eq!(next, Next::Go(Route::SignIn));
        let out = output(console);
        assert!(out.contains("]- Post"));
        assert!(out.contains("There is no post 9 on this page."));
        assert!(out.contains("Logged out successfully!"));
    }
}
