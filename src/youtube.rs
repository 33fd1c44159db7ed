//! YouTube URL handling.
//!
//! Extracts the canonical 11-character video ID from the URL shapes YouTube
//! uses in the wild, or passes a bare ID through unchanged.

use regex::Regex;
use tracing::trace;

/// Extracts YouTube video IDs from URLs or bare ID strings.
///
/// Compiles its patterns once; reuse the extractor when processing many
/// inputs.
pub struct VideoIdExtractor {
    bare_id: Regex,
    url_patterns: Vec<Regex>,
}

impl VideoIdExtractor {
    pub fn new() -> Self {
        // A bare ID is exactly 11 characters of [a-zA-Z0-9_-], nothing else.
        let bare_id = Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid regex");

        // URL shapes, tried in order. The last pattern picks up watch URLs
        // where v= is not the first query parameter.
        let url_patterns = [
            r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})",
            r"(?:https?://)?youtu\.be/([a-zA-Z0-9_-]{11})",
            r"(?:https?://)?(?:www\.)?youtube\.com/embed/([a-zA-Z0-9_-]{11})",
            r"(?:https?://)?(?:www\.)?youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex"))
        .collect();

        Self {
            bare_id,
            url_patterns,
        }
    }

    /// Extract a video ID from a YouTube URL or bare ID.
    ///
    /// Returns `None` when the input matches none of the known shapes.
    /// IDs are case-sensitive and returned exactly as they appear.
    pub fn extract(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }

        // Bare IDs pass through unchanged, before any URL matching.
        if self.bare_id.is_match(input) {
            return Some(input.to_string());
        }

        for pattern in &self.url_patterns {
            if let Some(caps) = pattern.captures(input) {
                trace!("input matched {}", pattern.as_str());
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }

        None
    }
}

impl Default for VideoIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a video ID from a YouTube URL or bare ID.
///
/// Convenience wrapper around [`VideoIdExtractor`] for one-off calls.
pub fn extract_video_id(input: &str) -> Option<String> {
    VideoIdExtractor::new().extract(input)
}
