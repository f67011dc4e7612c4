//! Transcript listing backend
//!
//! Uses walkdir for a single-level traversal of the transcripts directory

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::Transcript;
use crate::core::paths::{file_name, is_transcript_file};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::modified_iso;

/// List transcripts in `dir`, ordered by file name
///
/// A missing or unreadable directory yields an empty list.
pub fn list_transcripts(dir: &Path) -> Result<Vec<Transcript>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut transcripts = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_transcript_file(path) {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat transcript: {:?}", path))?;

        transcripts.push(Transcript {
            name: file_name(path),
            size: metadata.len(),
            modified: modified_iso(&metadata)
                .with_context(|| format!("Failed to read mtime: {:?}", path))?,
            path: path.to_path_buf(),
        });
    }

    transcripts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(transcripts)
}

/// The most recent transcript: the one whose name sorts last
pub fn current_transcript(dir: &Path) -> Result<Option<Transcript>> {
    let transcripts = list_transcripts(dir)?;
    Ok(transcripts.into_iter().max_by(|a, b| a.name.cmp(&b.name)))
}

/// Run the list command
pub fn run_list(dir: &Path, config: RenderConfig, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] listing {}", dir.display());
    }

    let transcripts = list_transcripts(dir)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render_listing(&transcripts));

    Ok(())
}
