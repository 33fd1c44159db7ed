//! Transcript data model and output formatting.
//!
//! A [`Transcript`] is assembled by whatever fetch layer talks to YouTube;
//! this module only reads it and renders it.

mod format;

pub use format::{
    extension_for_format, format_transcript, seconds_to_srt_time, seconds_to_vtt_time, FormatType,
};

use serde::{Deserialize, Serialize};

/// A single timed caption unit within a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSnippet {
    /// Caption text.
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
    /// Duration in seconds. May be zero for degenerate captions.
    pub duration: f64,
}

impl TranscriptSnippet {
    /// Create a new snippet.
    pub fn new(text: String, start: f64, duration: f64) -> Self {
        Self {
            text,
            start,
            duration,
        }
    }

    /// End offset in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A fetched transcript: timed snippets plus video and language metadata.
///
/// Snippets are ordered chronologically; start offsets are non-decreasing
/// but not necessarily gap-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Video ID this transcript belongs to.
    pub video_id: String,
    /// Human-readable language name.
    pub language: String,
    /// Language code of the caption track.
    pub language_code: String,
    /// Whether the track was auto-generated rather than manually created.
    pub is_generated: bool,
    /// Snippets in order of appearance.
    #[serde(rename = "transcript")]
    pub snippets: Vec<TranscriptSnippet>,
}

impl Transcript {
    /// Create a new transcript.
    pub fn new(
        video_id: String,
        language: String,
        language_code: String,
        is_generated: bool,
        snippets: Vec<TranscriptSnippet>,
    ) -> Self {
        Self {
            video_id,
            language,
            language_code,
            is_generated,
            snippets,
        }
    }

    /// Parse a transcript from its JSON representation, as produced by the
    /// fetch layer or by the `json` output format.
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Total duration in seconds: the end of the last snippet.
    pub fn duration_seconds(&self) -> f64 {
        self.snippets.last().map(|s| s.end()).unwrap_or(0.0)
    }

    /// Concatenated snippet text.
    pub fn full_text(&self) -> String {
        self.snippets
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
