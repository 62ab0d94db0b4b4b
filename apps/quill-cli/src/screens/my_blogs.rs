//! "My Blogs": the signed-in user's posts with edit and delete.

use std::io::Write;

use tokio::io::AsyncBufRead;

use quill_core::domain::PostId;
use quill_core::views::{MyBlogsView, Route};

use super::{Command, Next, unavailable};
use crate::console::Console;
use crate::render;
use crate::state::AppState;

const HELP: &str = "\
Commands:
  o N           expand or collapse post N
  e N           edit post N
  d N           delete post N
  r             reload your blogs
  r N           reload post N from the server
  all           back to All Blogs
  logout        log out
  q             quit";

pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> anyhow::Result<Next>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = MyBlogsView::new();
    if let Err(err) = view.load(state.blogs.as_ref()).await {
        tracing::error!(error = %err, "Error fetching blogs");
    }
    console.say(render::my_blogs(&view))?;

    loop {
        let Some(line) = console.prompt("myblogs> ").await? else {
            return Ok(Next::Quit);
        };
        match Command::parse(&line) {
            Command::Open(n) => {
                let Some(id) = nth_id(&view, n) else {
                    console.say(format!("You have no post {n}."))?;
                    continue;
                };
                view.toggle(&id);
            }
            Command::Edit(n) => {
                let Some(id) = nth_id(&view, n) else {
                    console.say(format!("You have no post {n}."))?;
                    continue;
                };
                if !edit(state, console, &mut view, &id).await? {
                    return Ok(Next::Quit);
                }
            }
            Command::Delete(n) => {
                let Some(id) = nth_id(&view, n) else {
                    console.say(format!("You have no post {n}."))?;
                    continue;
                };
                match view.delete(state.blogs.as_ref(), &id).await {
                    Ok(()) => {
                        tracing::info!(%id, "Blog deleted");
                        console.say("Blog deleted.")?;
                    }
                    Err(err) => tracing::error!(%id, error = %err, "Error deleting blog"),
                }
            }
            Command::Reload(n) => {
                let Some(id) = nth_id(&view, n) else {
                    console.say(format!("You have no post {n}."))?;
                    continue;
                };
                match view.reload_post(state.blogs.as_ref(), &id).await {
                    Ok(()) => tracing::debug!(%id, "Blog reloaded"),
                    Err(err) => tracing::warn!(%id, error = %err, "Error reloading blog"),
                }
            }
            Command::Refresh => {
                if let Err(err) = view.load(state.blogs.as_ref()).await {
                    tracing::error!(error = %err, "Error fetching blogs");
                }
            }
            Command::Go(Route::MyBlogs) => {}
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
        console.say(render::my_blogs(&view))?;
    }
}

fn nth_id(view: &MyBlogsView, n: usize) -> Option<PostId> {
    n.checked_sub(1)
        .and_then(|i| view.store().nth(i))
        .map(|post| post.id.clone())
}

/// Run the edit form for `id` until it is saved or abandoned.
/// `false` once input runs out.
async fn edit<R, W>(
    state: &AppState,
    console: &mut Console<R, W>,
    view: &mut MyBlogsView,
    id: &PostId,
) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut draft = match view.begin_edit(id) {
        Ok(session) => session.draft.clone(),
        Err(err) => {
            console.say(format!("! {err}"))?;
            return Ok(true);
        }
    };
    console.say("-- Edit blog (empty line keeps the current value) --")?;

    loop {
        let Some(title) = console.prompt_prefilled("Title", &draft.title).await? else {
            view.cancel_edit();
            return Ok(false);
        };
        draft.title = title;
        let Some(content) = console.prompt_prefilled("Content", &draft.content).await? else {
            view.cancel_edit();
            return Ok(false);
        };
        draft.content = content;

        if let Some(session) = view.editor_mut() {
            session.draft = draft.clone();
        }
        match view.submit_edit(state.blogs.as_ref()).await {
            Ok(()) => {
                tracing::info!(%id, "Blog updated");
                console.say("Blog updated.")?;
                return Ok(true);
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "Error updating blog");
                console.say(format!("! {err}"))?;
            }
        }

        let retry = console.prompt("Retry? [y/N] ").await?;
        if !matches!(retry.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
            view.cancel_edit();
            return Ok(retry.is_some());
        }
    }
}
