//! Message extraction
//!
//! Transcripts record each turn as a role marker followed by a JSON array of
//! content blocks:
//!
//! ```text
//! Human:
//! Content:
//! [
//!   {"type": "text", "text": "..."}
//! ]
//! ```
//!
//! Extraction is best-effort: segments whose JSON does not parse are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::model::{Message, Role};

/// Static regex for role markers
/// Format: \nHuman:\nContent:\n  or  \nAssistant:\nContent:\n
pub static ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n(Human|Assistant):\nContent:\n").expect("Invalid ROLE_RE regex")
});

/// Static regex for the first JSON array in a segment, closed by a line that is only `]`
pub static ARRAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(\[.*?\n\])(?:\n|\z)").expect("Invalid ARRAY_RE regex"));

/// A role marker and the text up to the next marker
#[derive(Debug)]
struct Segment<'a> {
    role: Role,
    body: &'a str,
}

/// Split content on role markers
fn segments(content: &str) -> Vec<Segment<'_>> {
    let markers: Vec<_> = ROLE_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let role = Role::from_marker(caps.get(1)?.as_str())?;
            Some((role, whole.start(), whole.end()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(role, _, body_start))| {
            let body_end = markers
                .get(i + 1)
                .map(|&(_, next_start, _)| next_start)
                .unwrap_or(content.len());
            Segment {
                role,
                body: &content[body_start..body_end],
            }
        })
        .collect()
}

/// Parse the content blocks of one segment, `None` when nothing usable is found
fn parse_blocks(body: &str) -> Option<Vec<Value>> {
    let caps = ARRAY_RE.captures(body)?;
    let json = caps.get(1)?.as_str();
    match serde_json::from_str::<Value>(json).ok()? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Text of a block when it is a non-empty `text` block
fn block_text(block: &Value) -> Option<&str> {
    if block.get("type")?.as_str()? != "text" {
        return None;
    }
    let text = block.get("text")?.as_str()?.trim();
    (!text.is_empty()).then_some(text)
}

/// Extract human/assistant messages in transcript order
pub fn extract_messages(content: &str) -> Vec<Message> {
    let mut messages = Vec::new();

    for segment in segments(content) {
        let Some(blocks) = parse_blocks(segment.body) else {
            continue;
        };

        messages.extend(
            blocks
                .iter()
                .filter_map(block_text)
                .map(|text| Message::new(segment.role, text)),
        );
    }

    messages
}
