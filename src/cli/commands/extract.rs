//! Extract command implementation.

use crate::youtube::VideoIdExtractor;
use anyhow::Result;
use tracing::debug;

/// Run the extract command.
pub fn run_extract(input: &str) -> Result<()> {
    let extractor = VideoIdExtractor::new();

    match extractor.extract(input) {
        Some(id) => {
            debug!("extracted video ID {} from input", id);
            // Bare ID on stdout so the command composes in scripts
            println!("{}", id);
            Ok(())
        }
        None => anyhow::bail!("Could not extract a video ID from '{}'", input),
    }
}
