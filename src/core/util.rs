//! Common utilities

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::time::SystemTime;

/// Truncate string to max characters, returning (truncated_string, was_truncated)
pub fn truncate_chars(s: &str, max_chars: usize) -> (String, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (s[..end].to_string(), true),
        None => (s.to_string(), false),
    }
}

/// Format a byte count as kilobytes with one decimal (e.g. `1.5 KB`)
pub fn format_kb(size: u64) -> String {
    format!("{:.1} KB", size as f64 / 1024.0)
}

/// ISO-8601 local timestamp for a file's modification time
pub fn modified_iso(metadata: &Metadata) -> std::io::Result<String> {
    let modified = metadata.modified()?;
    Ok(system_time_iso(modified))
}

/// Format a SystemTime as `YYYY-MM-DDTHH:MM:SS[.ffffff]` in local time
pub fn system_time_iso(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    if datetime.timestamp_subsec_micros() == 0 {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
