//! Transcript data model
//!
//! Every command maps its findings onto these types before rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A transcript file on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// File name (e.g. `2024-05-01-session.txt`)
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// Modification time, ISO-8601 local time
    pub modified: String,

    /// Full path to the file
    pub path: PathBuf,
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

impl Role {
    /// Parse a role marker as written in transcripts (`Human` / `Assistant`)
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "Human" => Some(Role::Human),
            "Assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Assistant => "assistant",
        }
    }

    /// Block label used when formatting messages
    pub fn label(&self) -> &'static str {
        match self {
            Role::Human => "HUMAN",
            Role::Assistant => "CLAUDE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// One matching line (1-indexed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub line: usize,
    pub text: String,
}

/// All kept matches for one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub file: String,
    pub matches: Vec<SearchMatch>,
}

/// User-facing failures that end the process with a short message
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("No transcripts found in {}", .0.display())]
    NoTranscripts(PathBuf),
}

impl TranscriptError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
