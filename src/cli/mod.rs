//! CLI module for Tekst.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tekst - YouTube Transcript Toolkit
///
/// Extracts video IDs from YouTube URLs and renders fetched transcripts as
/// JSON, plain text, SRT, or WebVTT. The name "Tekst" comes from the
/// Norwegian word for "text," which is also the everyday word for subtitles.
#[derive(Parser, Debug)]
#[command(name = "tekst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the 11-character video ID from a YouTube URL or bare ID
    Extract {
        /// YouTube URL or video ID
        input: String,
    },

    /// Render a fetched transcript document in another format
    Format {
        /// Path to a transcript JSON file, or '-' for stdin
        input: String,

        /// Output format (json, text, srt, vtt); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Save as <video_id>.<ext> in the configured output directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
