//! Transcript output formatting (JSON, plain text, SRT, VTT).
//!
//! Renders a fetched transcript in standard interchange formats for use
//! with subtitle tooling and downstream systems.

use super::Transcript;
use crate::error::TekstError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    Json,
    Text,
    Srt,
    Vtt,
}

impl FormatType {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Text => "txt",
            FormatType::Srt => "srt",
            FormatType::Vtt => "vtt",
        }
    }
}

impl std::str::FromStr for FormatType {
    type Err = TekstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FormatType::Json),
            "text" | "txt" => Ok(FormatType::Text),
            "srt" => Ok(FormatType::Srt),
            "vtt" | "webvtt" => Ok(FormatType::Vtt),
            _ => Err(TekstError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Json => write!(f, "json"),
            FormatType::Text => write!(f, "text"),
            FormatType::Srt => write!(f, "srt"),
            FormatType::Vtt => write!(f, "vtt"),
        }
    }
}

/// File extension for a raw format name, or `""` when unrecognized.
///
/// Lenient counterpart to parsing a [`FormatType`], for callers deriving
/// filenames from untrusted format strings.
pub fn extension_for_format(format: &str) -> &'static str {
    match format {
        "json" => "json",
        "text" => "txt",
        "srt" => "srt",
        "vtt" => "vtt",
        _ => "",
    }
}

/// Format a transcript for output.
pub fn format_transcript(transcript: &Transcript, format: FormatType) -> String {
    match format {
        FormatType::Json => format_json(transcript),
        FormatType::Text => format_text(transcript),
        FormatType::Srt => format_srt(transcript),
        FormatType::Vtt => format_vtt(transcript),
    }
}

/// Format as JSON with 2-space indentation.
///
/// Non-ASCII text is emitted literally so transcripts survive a round-trip
/// readably.
fn format_json(transcript: &Transcript) -> String {
    serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "{}".to_string())
}

/// Format as plain text, one timestamped line per snippet.
fn format_text(transcript: &Transcript) -> String {
    transcript
        .snippets
        .iter()
        .map(|s| format!("[{:.2}s] {}", s.start, s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format as SRT (SubRip).
fn format_srt(transcript: &Transcript) -> String {
    let mut output = String::new();

    for (i, snippet) in transcript.snippets.iter().enumerate() {
        // Sequence number (1-indexed)
        output.push_str(&format!("{}\n", i + 1));

        output.push_str(&format!(
            "{} --> {}\n",
            seconds_to_srt_time(snippet.start),
            seconds_to_srt_time(snippet.end())
        ));

        output.push_str(&snippet.text);
        output.push_str("\n\n");
    }

    output
}

/// Format as WebVTT. Cues carry no identifiers, only timing lines.
fn format_vtt(transcript: &Transcript) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for snippet in &transcript.snippets {
        output.push_str(&format!(
            "{} --> {}\n",
            seconds_to_vtt_time(snippet.start),
            seconds_to_vtt_time(snippet.end())
        ));

        output.push_str(&snippet.text);
        output.push_str("\n\n");
    }

    output
}

/// Convert seconds to SRT time format (HH:MM:SS,mmm).
///
/// Every field truncates rather than rounds, so cue boundaries stay
/// monotonic with snippet arithmetic. Hours are unbounded.
pub fn seconds_to_srt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms)
}

/// Convert seconds to WebVTT time format (HH:MM:SS.mmm).
pub fn seconds_to_vtt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptSnippet;

    fn sample_transcript() -> Transcript {
        Transcript::new(
            "dQw4w9WgXcQ".to_string(),
            "English".to_string(),
            "en".to_string(),
            false,
            vec![
                TranscriptSnippet::new("Hello world.".to_string(), 0.0, 1.5),
                TranscriptSnippet::new("This is a test.".to_string(), 1.5, 2.25),
            ],
        )
    }

    fn empty_transcript() -> Transcript {
        Transcript::new(
            "dQw4w9WgXcQ".to_string(),
            "English".to_string(),
            "en".to_string(),
            true,
            vec![],
        )
    }

    #[test]
    fn test_format_json() {
        let transcript = sample_transcript();
        let json = format_transcript(&transcript, FormatType::Json);

        assert!(json.contains("\"video_id\": \"dQw4w9WgXcQ\""));
        assert!(json.contains("\"language_code\": \"en\""));
        assert!(json.contains("\"is_generated\": false"));
        assert!(json.contains("\"transcript\""));
        assert!(json.contains("Hello world."));
    }

    #[test]
    fn test_format_json_round_trip() {
        let transcript = sample_transcript();
        let json = format_transcript(&transcript, FormatType::Json);

        let parsed: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, transcript);
    }

    #[test]
    fn test_format_json_keeps_non_ascii_literal() {
        let transcript = Transcript::new(
            "dQw4w9WgXcQ".to_string(),
            "Norwegian".to_string(),
            "no".to_string(),
            true,
            vec![TranscriptSnippet::new("blåbærsyltetøy".to_string(), 0.0, 1.0)],
        );

        let json = format_transcript(&transcript, FormatType::Json);
        assert!(json.contains("blåbærsyltetøy"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_format_text() {
        let transcript = sample_transcript();
        let text = format_transcript(&transcript, FormatType::Text);

        assert_eq!(text, "[0.00s] Hello world.\n[1.50s] This is a test.");
    }

    #[test]
    fn test_format_srt() {
        let transcript = sample_transcript();
        let srt = format_transcript(&transcript, FormatType::Srt);

        assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:01,500\nHello world.\n\n"));
        assert!(srt.contains("2\n00:00:01,500 --> 00:00:03,750\nThis is a test.\n\n"));
    }

    #[test]
    fn test_format_vtt() {
        let transcript = sample_transcript();
        let vtt = format_transcript(&transcript, FormatType::Vtt);

        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:01.500 --> 00:00:03.750\nThis is a test.\n\n"));
        // VTT cues carry no sequence numbers
        assert!(!vtt.contains("\n1\n"));
    }

    #[test]
    fn test_format_empty_transcript() {
        let transcript = empty_transcript();

        assert_eq!(format_transcript(&transcript, FormatType::Text), "");
        assert_eq!(format_transcript(&transcript, FormatType::Srt), "");
        assert_eq!(format_transcript(&transcript, FormatType::Vtt), "WEBVTT\n\n");
    }

    #[test]
    fn test_format_zero_duration_snippet() {
        let transcript = Transcript::new(
            "dQw4w9WgXcQ".to_string(),
            "English".to_string(),
            "en".to_string(),
            true,
            vec![TranscriptSnippet::new("blip".to_string(), 4.0, 0.0)],
        );

        let srt = format_transcript(&transcript, FormatType::Srt);
        assert!(srt.contains("00:00:04,000 --> 00:00:04,000"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<FormatType>().unwrap(), FormatType::Json);
        assert_eq!("text".parse::<FormatType>().unwrap(), FormatType::Text);
        assert_eq!("srt".parse::<FormatType>().unwrap(), FormatType::Srt);
        assert_eq!("SRT".parse::<FormatType>().unwrap(), FormatType::Srt);
        assert_eq!("vtt".parse::<FormatType>().unwrap(), FormatType::Vtt);
        assert_eq!("webvtt".parse::<FormatType>().unwrap(), FormatType::Vtt);
    }

    #[test]
    fn test_parse_unknown_format_is_unsupported() {
        let err = "xml".parse::<FormatType>().unwrap_err();
        assert!(matches!(err, TekstError::UnsupportedFormat(ref s) if s == "xml"));
    }

    #[test]
    fn test_srt_time() {
        assert_eq!(seconds_to_srt_time(0.0), "00:00:00,000");
        assert_eq!(seconds_to_srt_time(61.5), "00:01:01,500");
        assert_eq!(seconds_to_srt_time(3661.123), "01:01:01,123");
    }

    #[test]
    fn test_srt_time_truncates_milliseconds() {
        // Truncation, not rounding, at the millisecond boundary
        assert_eq!(seconds_to_srt_time(3661.999), "01:01:01,999");
        assert_eq!(seconds_to_srt_time(0.9999), "00:00:00,999");
    }

    #[test]
    fn test_srt_time_hours_are_unbounded() {
        assert_eq!(seconds_to_srt_time(90_000.0), "25:00:00,000");
    }

    #[test]
    fn test_vtt_time() {
        assert_eq!(seconds_to_vtt_time(0.0), "00:00:00.000");
        assert_eq!(seconds_to_vtt_time(3.75), "00:00:03.750");
        assert_eq!(seconds_to_vtt_time(3661.999), "01:01:01.999");
    }

    #[test]
    fn test_extension() {
        assert_eq!(FormatType::Json.extension(), "json");
        assert_eq!(FormatType::Text.extension(), "txt");
        assert_eq!(FormatType::Srt.extension(), "srt");
        assert_eq!(FormatType::Vtt.extension(), "vtt");
    }

    #[test]
    fn test_extension_for_format() {
        assert_eq!(extension_for_format("json"), "json");
        assert_eq!(extension_for_format("text"), "txt");
        assert_eq!(extension_for_format("srt"), "srt");
        assert_eq!(extension_for_format("vtt"), "vtt");
        assert_eq!(extension_for_format("bogus"), "");
        assert_eq!(extension_for_format(""), "");
    }
}
