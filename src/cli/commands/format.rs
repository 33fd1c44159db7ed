//! Format command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::filename::transcript_filename;
use crate::language::is_valid_language_code;
use crate::transcript::{format_transcript, FormatType, Transcript};
use anyhow::{Context, Result};
use std::io::Read;
use tracing::debug;

/// Run the format command.
pub fn run_format(
    input: &str,
    format: Option<&str>,
    output: Option<String>,
    save: bool,
    settings: Settings,
) -> Result<()> {
    let raw = read_input(input)?;

    let transcript = Transcript::from_json(&raw)
        .with_context(|| format!("Failed to parse transcript document from {}", input))?;

    debug!(
        "loaded transcript for {}: {} snippets, {:.1}s",
        transcript.video_id,
        transcript.snippets.len(),
        transcript.duration_seconds()
    );

    if !is_valid_language_code(&transcript.language_code) {
        Output::warning(&format!(
            "Transcript has an unusual language code: '{}'",
            transcript.language_code
        ));
    }

    let format_name = match format {
        Some(f) => f.to_string(),
        None => settings.output.format.clone(),
    };
    let format: FormatType = format_name.parse()?;

    let rendered = format_transcript(&transcript, format);

    match output {
        Some(path) if path != "-" => {
            std::fs::write(&path, &rendered)?;
            Output::success(&format!(
                "Wrote {} transcript for '{}' to {}",
                format, transcript.video_id, path
            ));
        }
        _ if save => {
            let dir = settings.output_dir();
            std::fs::create_dir_all(&dir)?;

            let path = dir.join(transcript_filename(&transcript.video_id, format));
            std::fs::write(&path, &rendered)?;
            Output::success(&format!(
                "Saved {} transcript for '{}' to {}",
                format,
                transcript.video_id,
                path.display()
            ));
        }
        _ => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Read the transcript document from a file, or stdin when input is "-".
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}
