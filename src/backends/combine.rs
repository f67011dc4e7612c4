//! Combine backend - concatenates every transcript in name order

use anyhow::Result;
use std::path::Path;

use crate::backends::list::list_transcripts;
use crate::core::file_reader::read_decoded;

/// Width of the rule line around each file banner
pub const RULE_WIDTH: usize = 80;

/// Separator block placed before each transcript's content
fn separator(name: &str) -> [String; 3] {
    let rule = "=".repeat(RULE_WIDTH);
    [
        format!("\n{}", rule),
        format!("=== FILE: {} ===", name),
        format!("{}\n", rule),
    ]
}

/// Concatenate all transcripts chronologically (by file name)
pub fn combine_transcripts(dir: &Path) -> Result<String> {
    let mut parts = Vec::new();

    for transcript in list_transcripts(dir)? {
        parts.extend(separator(&transcript.name));
        parts.push(read_decoded(&transcript.path)?);
    }

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_combine_empty_dir() {
        let temp = tempdir().unwrap();
        assert_eq!(combine_transcripts(temp.path()).unwrap(), "");
    }

    #[test]
    fn test_combine_orders_files_by_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "second \\u0062").unwrap();
        fs::write(temp.path().join("a.txt"), "first").unwrap();

        let combined = combine_transcripts(temp.path()).unwrap();

        let banner_a = combined.find("=== FILE: a.txt ===").unwrap();
        let banner_b = combined.find("=== FILE: b.txt ===").unwrap();
        let body_a = combined.find("first").unwrap();
        let body_b = combined.find("second b").unwrap();

        assert!(banner_a < body_a);
        assert!(body_a < banner_b);
        assert!(banner_b < body_b);
    }

    #[test]
    fn test_combine_exact_layout() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let rule = "=".repeat(RULE_WIDTH);
        let expected = format!("\n{rule}\n=== FILE: a.txt ===\n{rule}\n\nhello");
        assert_eq!(combine_transcripts(temp.path()).unwrap(), expected);
    }
}
