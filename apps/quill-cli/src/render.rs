//! Plain-text rendering of the view models.

use std::fmt::Write;

use quill_core::domain::Post;
use quill_core::views::{ExpandState, FeedView, FetchStatus, MyBlogsView};

/// One post card, numbered for the command line.
pub fn card(number: usize, post: &Post, expand: &ExpandState) -> String {
    let marker = if expand.is_expanded(&post.id) { "-" } else { "+" };
    let mut out = format!("[{number}]{marker} {}\n", post.title);
    for line in expand.body(post).lines() {
        let _ = writeln!(out, "     {line}");
    }
    let _ = writeln!(out, "     Author: {}", post.byline());
    let _ = writeln!(out, "     Date: {}", post.display_date());
    out
}

pub fn feed(view: &FeedView) -> String {
    let mut out = String::from("== All Blogs ==\n");
    out.push_str("Welcome to the blog section. Below are the latest posts!\n\n");
    push_status(&mut out, view.status(), "blogs");

    if view.posts().is_empty() {
        out.push_str("No blogs on this page.\n");
    }
    for (i, post) in view.posts().iter().enumerate() {
        out.push_str(&card(i + 1, post, view.expand()));
    }

    let prev = if view.can_prev() { "<p Prev" } else { "  ----" };
    let next = if view.can_next() { "Next n>" } else { "----  " };
    let _ = writeln!(out, "\n{prev}   {}   {next}", view.page_label());
    out
}

pub fn my_blogs(view: &MyBlogsView) -> String {
    let mut out = String::from("== My Blogs ==\n\n");
    push_status(&mut out, view.status(), "your blogs");

    if let Some(err) = view.last_error()
        && !matches!(view.status(), FetchStatus::Failed(_))
    {
        let _ = writeln!(out, "! {err}");
    }
    if view.store().is_empty() {
        out.push_str("You have not written any blogs yet.\n");
    }
    for (i, post) in view.store().iter().enumerate() {
        out.push_str(&card(i + 1, post, view.expand()));
    }
    out
}

fn push_status(out: &mut String, status: &FetchStatus, what: &str) {
    match status {
        FetchStatus::Fetching => {
            let _ = writeln!(out, "Loading {what}...");
        }
        FetchStatus::Failed(err) => {
            let _ = writeln!(out, "! Could not load {what}: {err}");
        }
        FetchStatus::Idle | FetchStatus::Loaded => {}
    }
}
