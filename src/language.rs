//! Language code validation.

use regex::Regex;
use std::sync::OnceLock;

fn language_code_regex() -> &'static Regex {
    static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    LANGUAGE_CODE_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z]{2,3}(-[a-zA-Z]{2,4})?$").expect("Invalid regex"))
}

/// Check whether a string is a plausible caption language code.
///
/// Accepts the BCP-47-style tags YouTube uses for caption tracks: a 2-3
/// letter primary subtag, optionally followed by a hyphen and a 2-4 letter
/// subtag (`en`, `zh-TW`, `fil`, `zh-Hans`). The whole string must match.
pub fn is_valid_language_code(code: &str) -> bool {
    if code.is_empty() {
        return false;
    }

    language_code_regex().is_match(code)
}
