/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{TranscriptDirBuilder, scenario_a};
use predicates::prelude::*;

fn viewer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_transcript-viewer"));
    cmd.env_remove("TRANSCRIPT_VIEWER_CATALOG")
        .env_remove("TRANSCRIPT_VIEWER_LOG")
        .env_remove("TRANSCRIPT_VIEWER_LOG_FILE");
    cmd
}

#[test]
fn test_cli_stats_messages_file() {
    let dir = TranscriptDirBuilder::new().with_conversations("a.jsonl", &scenario_a());

    viewer()
        .arg("stats")
        .arg(dir.file("a.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript Statistics"))
        .stdout(predicate::str::contains("Record shape: messages"))
        .stdout(predicate::str::contains("Conversations: 2"))
        .stdout(predicate::str::contains("Prefilled assistant turns: 1"));
}

#[test]
fn test_cli_stats_text_file_with_query() {
    let dir = TranscriptDirBuilder::new().with_texts("b.jsonl", &["hello world", "goodbye"]);

    viewer()
        .args(["stats", "--query", "hello"])
        .arg(dir.file("b.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Record shape: text"))
        .stdout(predicate::str::contains("Conversations: 2"))
        .stdout(predicate::str::contains("Matching \"hello\": 1"));
}

#[test]
fn test_cli_show_prefilled_conversation() {
    let dir = TranscriptDirBuilder::new().with_conversations("a.jsonl", &scenario_a());

    viewer()
        .args(["show", "--index", "2"])
        .arg(dir.file("a.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewing 2 of 2"))
        .stdout(predicate::str::contains("Assistant (Prefilled)\nok"));
}

#[test]
fn test_cli_show_with_query() {
    let dir = TranscriptDirBuilder::new().with_conversations("a.jsonl", &scenario_a());

    viewer()
        .args(["show", "--query", "hello"])
        .arg(dir.file("a.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewing 1 of 1"))
        .stdout(predicate::str::contains("User\nhi"));
}

#[test]
fn test_cli_show_out_of_range_fails() {
    let dir = TranscriptDirBuilder::new().with_conversations("a.jsonl", &scenario_a());

    viewer()
        .args(["show", "--index", "5"])
        .arg(dir.file("a.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = TranscriptDirBuilder::new();

    viewer()
        .arg("stats")
        .arg(dir.file("missing.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_unparseable_file_fails() {
    let dir = TranscriptDirBuilder::new().with_file("bad.jsonl", "this is not json\n");

    viewer()
        .arg("stats")
        .arg(dir.file("bad.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("as conversations or text records"));
}

#[test]
fn test_cli_help_flag() {
    viewer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse and search chat transcripts"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_cli_version_flag() {
    viewer().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_unknown_flag() {
    viewer().arg("--no-such-flag").assert().failure();
}

#[test]
fn test_cli_log_file_receives_logs() {
    let dir = TranscriptDirBuilder::new().with_conversations("a.jsonl", &scenario_a());
    let log = dir.file("viewer.log");

    viewer()
        .args(["stats", "--log-level", "info", "--log-file"])
        .arg(&log)
        .arg(dir.file("a.jsonl"))
        .assert()
        .success();

    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("reading transcript"));
}
