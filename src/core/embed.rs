//! Video URL normalization for repair guides.

use regex::Regex;
use std::sync::LazyLock;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

// watch?v=, youtu.be/, /v/, /e/, /embed/ and other path shapes, capturing
// the 11-character video id.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video id pattern is valid")
});

/// Rewrite a share/watch link into the embeddable player form.
///
/// URLs already on an `/embed/` path pass through, as does anything without
/// a recognizable video id. Never fails.
pub fn convert_to_embed_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.contains("/embed/") {
        return url.to_string();
    }

    match extract_video_id(url) {
        Some(id) => format!("{EMBED_BASE}{id}"),
        None => url.to_string(),
    }
}

pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
