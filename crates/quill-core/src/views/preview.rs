/// Characters shown for a collapsed post.
pub const PREVIEW_CHARS: usize = 100;

/// Collapsed-card text: the first `PREVIEW_CHARS` characters, with `...`
/// appended only when something was cut.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
