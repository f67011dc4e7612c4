//! Read backend - whole-file reading with optional tail

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::file_reader::{read_decoded, tail_lines};
use crate::core::model::TranscriptError;
use crate::core::paths::transcript_path;

/// Read and decode a transcript, keeping only the last `tail` lines if given
pub fn read_transcript(path: &Path, tail: Option<usize>) -> Result<String> {
    let content = read_decoded(path)?;
    Ok(match tail {
        Some(n) => tail_lines(&content, n),
        None => content,
    })
}

/// Resolve a transcript selected by name, failing when it does not exist
pub fn resolve_named(dir: &Path, name: &str) -> Result<PathBuf, TranscriptError> {
    let path = transcript_path(dir, name);
    if !path.exists() {
        return Err(TranscriptError::NotFound(name.to_string()));
    }
    Ok(path)
}
