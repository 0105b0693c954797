//! Text normalization
//!
//! Queries and indexed fields pass through the same normalization so that
//! matching is case- and punctuation-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;

static STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s|-|\.").unwrap());

/// Canonicalize text for substring matching: strip whitespace, hyphens and
/// periods, then lowercase. Absent text normalizes to the empty string.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(s) => STRIP.replace_all(s, "").to_lowercase(),
        None => String::new(),
    }
}
