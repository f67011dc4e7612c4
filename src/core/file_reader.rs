//! Transcript file reading
//!
//! Files are read whole. Bytes that are not valid UTF-8 are replaced rather
//! than rejected, then escapes are decoded.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::decode::decode_bytes;

/// Read a transcript and decode it
pub fn read_decoded(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read transcript: {:?}", path))?;
    Ok(decode_bytes(&bytes))
}

/// Keep only the last `n` lines of `text`
///
/// Lines are split on `\n`; a trailing newline produces an empty final line.
/// `n == 0` keeps everything.
pub fn tail_lines(text: &str, n: usize) -> String {
    if n == 0 {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
