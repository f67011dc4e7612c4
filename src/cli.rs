//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::combine::combine_transcripts;
use crate::backends::list::{current_transcript, run_list};
use crate::backends::messages::extract_messages;
use crate::backends::read::{read_transcript, resolve_named};
use crate::backends::search::run_search;
use crate::core::file_reader::tail_lines;
use crate::core::model::TranscriptError;
use crate::core::paths::DEFAULT_TRANSCRIPTS_DIR;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// get-transcript - recover conversation history from stored transcripts.
#[derive(Parser, Debug)]
#[command(name = "get-transcript")]
#[command(
    author,
    version,
    about,
    long_about = r#"Recover full conversation history from locally stored transcript files.

Transcripts are the *.txt files in the transcripts directory (journal.txt is
never treated as one). Escaped characters (\uXXXX) are decoded on read.

With no mode flag, the most recent transcript (the one whose name sorts last)
is printed and its name is reported on stderr.

Examples:
    get-transcript --list
    get-transcript --search "deploy script"
    get-transcript --tail 200 --messages
    get-transcript --file 2024-05-01-session.txt --messages --truncate 500
    get-transcript --all --output combined.txt
"#
)]
pub struct Cli {
    /// List all transcripts.
    #[arg(short, long)]
    pub list: bool,

    /// Combine all transcripts chronologically.
    #[arg(short, long)]
    pub all: bool,

    /// Specific transcript file (by name).
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// Search every transcript (case-insensitive).
    #[arg(
        short,
        long,
        value_name = "QUERY",
        long_help = "Case-insensitive substring search across every transcript.\n\n\
Prints each matching file with up to 10 matching lines and their line numbers."
    )]
    pub search: Option<String>,

    /// Last N lines only.
    #[arg(short, long, value_name = "N")]
    pub tail: Option<usize>,

    /// Extract messages only.
    #[arg(
        short,
        long,
        long_help = "Extract Human/Assistant messages from the selected content and print\n\
them as [HUMAN]/[CLAUDE] blocks instead of the raw transcript."
    )]
    pub messages: bool,

    /// Output file path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Truncate messages to N chars.
    #[arg(long, value_name = "N")]
    pub truncate: Option<usize>,

    /// Transcripts directory.
    #[arg(
        short,
        long,
        env = "TRANSCRIPTS_DIR",
        default_value = DEFAULT_TRANSCRIPTS_DIR,
        value_name = "DIR"
    )]
    pub dir: PathBuf,

    /// Output format for listings, search results and messages (text/json/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = ["text", "json", "jsonl"]
    )]
    pub format: String,

    /// Quiet mode (no stderr notices).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::new(format, !cli.no_color);

    if cli.list {
        return run_list(&cli.dir, render_config, cli.verbose);
    }

    if let Some(query) = cli.search.as_deref().filter(|q| !q.is_empty()) {
        return run_search(&cli.dir, query, render_config, cli.verbose);
    }

    let mut result = select_content(&cli)?;

    if cli.messages && !result.is_empty() {
        let messages = extract_messages(&result);
        if cli.verbose {
            eprintln!("[verbose] extracted {} messages", messages.len());
        }
        result = Renderer::with_config(render_config).render_messages(&messages, cli.truncate);
    }

    emit(&result, cli.output.as_deref())
}

/// Content for the selected mode: --all, --file or the current transcript
fn select_content(cli: &Cli) -> Result<String> {
    if cli.all {
        let combined = combine_transcripts(&cli.dir)?;
        return Ok(match cli.tail {
            Some(n) => tail_lines(&combined, n),
            None => combined,
        });
    }

    let path = match cli.file.as_deref() {
        Some(name) => resolve_named(&cli.dir, name)?,
        None => {
            let current = current_transcript(&cli.dir)?
                .ok_or_else(|| TranscriptError::NoTranscripts(cli.dir.clone()))?;
            if !cli.quiet {
                eprintln!("Current: {}\n", current.name);
            }
            current.path
        }
    };

    if cli.verbose {
        eprintln!("[verbose] reading {}", path.display());
    }

    read_transcript(&path, cli.tail)
}

/// Write the result to `output` or stdout; empty results print nothing
fn emit(result: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, result)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            println!("Saved: {}", path.display());
        }
        None if !result.is_empty() => println!("{}", result),
        None => {}
    }
    Ok(())
}
