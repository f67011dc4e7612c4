//! Transcript directory conventions

use std::path::{Path, PathBuf};

/// Directory searched when neither `--dir` nor `TRANSCRIPTS_DIR` is given
pub const DEFAULT_TRANSCRIPTS_DIR: &str = "/mnt/transcripts";

/// File kept alongside transcripts that is never treated as one
pub const RESERVED_FILE_NAME: &str = "journal.txt";

/// Extension every transcript carries
pub const TRANSCRIPT_EXTENSION: &str = "txt";

/// Check whether a path names a transcript (`*.txt`, not the reserved file)
pub fn is_transcript_file(path: &Path) -> bool {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == TRANSCRIPT_EXTENSION)
        .unwrap_or(false);

    is_txt && file_name(path) != RESERVED_FILE_NAME
}

/// File name as a string (lossy), empty when the path has none
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path of a transcript selected by name
pub fn transcript_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
