//! Search backend - case-insensitive substring search across transcripts

use anyhow::Result;
use std::path::Path;

use crate::backends::list::list_transcripts;
use crate::core::file_reader::read_decoded;
use crate::core::model::{SearchMatch, SearchResult};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::truncate_chars;

/// Matches kept per transcript
pub const MAX_MATCHES_PER_FILE: usize = 10;

/// Characters of a matched line kept in results
pub const MAX_MATCH_CHARS: usize = 200;

/// Search one transcript's decoded content, returning kept matches
pub fn search_content(content: &str, query: &str) -> Vec<SearchMatch> {
    let query_lower = query.to_lowercase();

    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&query_lower))
        .take(MAX_MATCHES_PER_FILE)
        .map(|(i, line)| SearchMatch {
            line: i + 1,
            text: truncate_chars(line, MAX_MATCH_CHARS).0,
        })
        .collect()
}

/// Search every transcript in `dir`, in listing order
pub fn search_transcripts(dir: &Path, query: &str) -> Result<Vec<SearchResult>> {
    let mut results = Vec::new();

    for transcript in list_transcripts(dir)? {
        let content = read_decoded(&transcript.path)?;
        let matches = search_content(&content, query);
        if !matches.is_empty() {
            results.push(SearchResult {
                file: transcript.name,
                matches,
            });
        }
    }

    Ok(results)
}

/// Run the search command
pub fn run_search(dir: &Path, query: &str, config: RenderConfig, verbose: bool) -> Result<()> {
    let results = search_transcripts(dir, query)?;

    if verbose {
        eprintln!(
            "[verbose] {} transcripts matched {:?} in {}",
            results.len(),
            query,
            dir.display()
        );
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render_search(query, &results));

    Ok(())
}
