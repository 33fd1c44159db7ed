//! Filename helpers for saved transcripts.

use crate::transcript::FormatType;

/// Replace characters that are invalid in filenames on common filesystems.
///
/// Each of `< > : " / \ | ? *` becomes `_`. Trailing spaces and periods are
/// trimmed afterwards since some filesystems reject names ending in either;
/// interior characters are otherwise left untouched.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect();

    replaced
        .trim_end_matches(|c| c == ' ' || c == '.')
        .to_string()
}

/// Default filename for a saved transcript: `<sanitized-id>.<ext>`.
pub fn transcript_filename(video_id: &str, format: FormatType) -> String {
    format!("{}.{}", sanitize_filename(video_id), format.extension())
}
