//! Tekst - YouTube Transcript Toolkit
//!
//! A CLI tool for extracting YouTube video identifiers and rendering fetched
//! transcripts in standard interchange formats.
//!
//! The name "Tekst" comes from the Norwegian word for "text," which is also
//! the everyday word for subtitles.
//!
//! # Overview
//!
//! Tekst allows you to:
//! - Pull the canonical 11-character video ID out of common YouTube URL shapes
//! - Validate caption language codes
//! - Render transcripts as JSON, plain text, SRT, or WebVTT
//! - Derive safe filenames for saved transcripts
//!
//! The transcript itself is supplied by an external fetch layer; Tekst only
//! reads it and transforms it.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `youtube` - Video ID extraction
//! - `language` - Language code validation
//! - `transcript` - Transcript model and output formatting
//! - `filename` - Filename sanitization for saved output
//! - `config` - Configuration management
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust
//! use tekst::transcript::{format_transcript, FormatType, Transcript, TranscriptSnippet};
//! use tekst::youtube::extract_video_id;
//!
//! let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
//!
//! let transcript = Transcript::new(
//!     id,
//!     "English".to_string(),
//!     "en".to_string(),
//!     false,
//!     vec![TranscriptSnippet::new("Hello".to_string(), 0.0, 1.5)],
//! );
//!
//! let srt = format_transcript(&transcript, FormatType::Srt);
//! assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:01,500"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod language;
pub mod transcript;
pub mod youtube;

pub use error::{Result, TekstError};
