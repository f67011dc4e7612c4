//! Renderer module
//!
//! Renders listings, search results and extracted messages as text, json or jsonl

use colored::Colorize;
use serde::Serialize;

use crate::core::model::{Message, SearchResult, Transcript};
use crate::core::util::{format_kb, truncate_chars};

/// Characters of a matched line shown in text search output
pub const SEARCH_PREVIEW_CHARS: usize = 80;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }
}

/// Renderer for command results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the transcript listing
    pub fn render_listing(&self, transcripts: &[Transcript]) -> String {
        match self.config.format {
            OutputFormat::Text => {
                let mut output = format!("Found {} transcripts:\n", transcripts.len());
                for t in transcripts {
                    output.push_str(&format!("\n  {} ({})", t.name, format_kb(t.size)));
                }
                output
            }
            OutputFormat::Json => render_json(transcripts),
            OutputFormat::Jsonl => render_jsonl(transcripts),
        }
    }

    /// Render search results; an empty result set gets a "no matches" line
    pub fn render_search(&self, query: &str, results: &[SearchResult]) -> String {
        match self.config.format {
            OutputFormat::Text => {
                if results.is_empty() {
                    return format!("No matches for: {}", query);
                }

                let mut lines = Vec::new();
                for result in results {
                    lines.push(self.banner(&format!("=== {} ===", result.file)));
                    for m in &result.matches {
                        let (preview, _) = truncate_chars(&m.text, SEARCH_PREVIEW_CHARS);
                        lines.push(format!("  L{}: {}{}", m.line, preview, ELLIPSIS));
                    }
                }
                lines.join("\n")
            }
            OutputFormat::Json => render_json(results),
            OutputFormat::Jsonl => render_jsonl(results),
        }
    }

    /// Render extracted messages, capping each text at `max_length` chars
    pub fn render_messages(&self, messages: &[Message], max_length: Option<usize>) -> String {
        match self.config.format {
            OutputFormat::Text => format_messages(messages, max_length),
            OutputFormat::Json | OutputFormat::Jsonl => {
                let capped: Vec<Message> = messages
                    .iter()
                    .map(|m| Message::new(m.role, cap_text(&m.text, max_length)))
                    .collect();
                if self.config.format == OutputFormat::Json {
                    render_json(&capped)
                } else {
                    render_jsonl(&capped)
                }
            }
        }
    }

    fn banner(&self, text: &str) -> String {
        if self.config.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Format messages as labeled blocks:
///
/// ```text
///
/// [HUMAN]:
/// question
///
///
/// [CLAUDE]:
/// answer
/// ```
pub fn format_messages(messages: &[Message], max_length: Option<usize>) -> String {
    messages
        .iter()
        .map(|msg| format!("\n[{}]:\n{}\n", msg.role.label(), cap_text(&msg.text, max_length)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to `max_length` chars plus an ellipsis; `None` or `0` means no cap
fn cap_text(text: &str, max_length: Option<usize>) -> String {
    match max_length {
        Some(max) if max > 0 => match truncate_chars(text, max) {
            (cut, true) => format!("{}{}", cut, ELLIPSIS),
            (whole, false) => whole,
        },
        _ => text.to_string(),
    }
}

fn render_json<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}

fn render_jsonl<T: Serialize>(items: &[T]) -> String {
    items
        .iter()
        .filter_map(|item| serde_json::to_string(item).ok())
        .collect::<Vec<_>>()
        .join("\n")
}
