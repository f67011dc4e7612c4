//! Golden tests for get-transcript
//!
//! These tests run the binary against the fixture transcripts and check the
//! exact output. They guard:
//! - Output format stability (listing, search, banners, message blocks)
//! - Decoding of escaped characters end to end
//! - Exclusion of the reserved journal file

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the fixture transcripts
fn transcripts_dir() -> PathBuf {
    fixtures_dir().join("transcripts")
}

/// Create a command pointed at the fixture transcripts
fn transcript_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("get-transcript"));
    cmd.env_remove("TRANSCRIPTS_DIR")
        .arg("--dir")
        .arg(transcripts_dir())
        .arg("--no-color");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to execute");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== List Tests ====================

    #[test]
    fn golden_list_names() {
        let stdout = stdout_of(transcript_cmd().args(["--list", "--format", "jsonl"]));

        let names: Vec<String> = stdout
            .lines()
            .filter_map(|l| serde_json::from_str::<Value>(l).ok())
            .filter_map(|v| v["name"].as_str().map(String::from))
            .collect();

        assert_eq!(names, vec!["2024-05-01-session.txt", "2024-05-02-session.txt"]);
    }

    // ==================== Search Tests ====================

    #[test]
    fn golden_search_server() {
        let stdout = stdout_of(transcript_cmd().args(["--search", "SERVER"]));

        let expected = [
            "=== 2024-05-01-session.txt ===",
            "  L8:     \"text\": \"How do I restart the café server?\"...",
            "=== 2024-05-02-session.txt ===",
            "  L8:     \"text\": \"Did the server restart work?\"...",
            "  L17:     \"text\": \"Yes, the server is healthy ✔\"...",
        ];
        assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
    }

    // ==================== Messages Tests ====================

    #[test]
    fn golden_messages_current_transcript() {
        let stdout = stdout_of(transcript_cmd().args(["--quiet", "--messages"]));

        let expected = "
[HUMAN]:
Did the server restart work?


[CLAUDE]:
Yes, the server is healthy ✔

";
        assert_eq!(stdout, expected);
    }

    #[test]
    fn golden_messages_all_json() {
        let stdout = stdout_of(transcript_cmd().args(["--all", "--messages", "--format", "json"]));
        let messages: Vec<Value> = serde_json::from_str(&stdout).unwrap();

        let pairs: Vec<(String, String)> = messages
            .iter()
            .map(|m| {
                (
                    m["role"].as_str().unwrap().to_string(),
                    m["text"].as_str().unwrap().to_string(),
                )
            })
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("human".to_string(), "How do I restart the café server?".to_string()),
                ("assistant".to_string(), "Run the restart script, then check the logs.".to_string()),
                ("human".to_string(), "Did the server restart work?".to_string()),
                ("assistant".to_string(), "Yes, the server is healthy ✔".to_string()),
            ]
        );
    }

    // ==================== Combine Tests ====================

    #[test]
    fn golden_all_banners() {
        let stdout = stdout_of(transcript_cmd().arg("--all"));

        let banners: Vec<&str> = stdout
            .lines()
            .filter(|l| l.starts_with("=== FILE:"))
            .collect();
        assert_eq!(
            banners,
            vec![
                "=== FILE: 2024-05-01-session.txt ===",
                "=== FILE: 2024-05-02-session.txt ===",
            ]
        );
        assert!(!stdout.contains("Journal:"));
        assert!(!stdout.contains("\\u00e9"));
    }
}
