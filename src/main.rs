//! get-transcript - Recover conversation history from stored transcripts
//!
//! get-transcript provides:
//! - Listing and selection of transcript files
//! - Escape decoding of transcript text
//! - Case-insensitive search across transcripts
//! - Chronological combination of every transcript
//! - Extraction of human/assistant messages

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod backends;
mod cli;
mod core;

use crate::core::model::TranscriptError;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Err(err) = cli::run(cli) {
        if let Some(e) = err.downcast_ref::<TranscriptError>() {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
        return Err(err);
    }

    Ok(())
}
