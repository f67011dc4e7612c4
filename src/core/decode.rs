//! Escape decoding
//!
//! Transcripts store non-ASCII text as `\uXXXX` escapes. Valid escapes are
//! resolved; surrogate halves cannot be resolved on their own and stay literal.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Static regex for a four-digit unicode escape
/// Format: \uXXXX
pub static ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("Invalid ESCAPE_RE regex"));

/// Convert `\uXXXX` escapes to the characters they name
pub fn decode_unicode_escapes(content: &str) -> Cow<'_, str> {
    ESCAPE_RE.replace_all(content, |caps: &Captures| {
        let literal = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| literal.to_string())
    })
}

/// Decode raw bytes: invalid UTF-8 is replaced, then escapes are resolved
pub fn decode_bytes(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    decode_unicode_escapes(&text).into_owned()
}
