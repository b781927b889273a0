//! Integration tests for top-level CLI behavior.
//!
//! Result-producing runs are driven through `RELCHECK_REPLAY` cassettes
//! so no test ever touches the network.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::json;

use relcheck::cassette::recorder::CassetteRecorder;

fn run_relcheck(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_relcheck");
    Command::new(bin).args(args).output().expect("failed to run relcheck binary")
}

fn run_relcheck_replaying(cassette: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_relcheck");
    Command::new(bin)
        .args(args)
        .env("RELCHECK_REPLAY", cassette)
        .output()
        .expect("failed to run relcheck binary")
}

/// Writes a cassette answering one lookup per (sha, files) pair.
fn write_cassette(name: &str, lookups: &[(&str, &[&str])]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("relcheck_cli_test_{name}"));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("commits.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, name, "test");
    for (sha, files) in lookups {
        let files: Vec<_> = files.iter().map(|f| json!({"filename": f})).collect();
        recorder.record(
            "commits",
            "commit_detail",
            json!({"sha": sha}),
            json!({"Ok": {"files": files}}),
        );
    }
    recorder.finish().unwrap();
    path
}

#[test]
fn missing_arguments_exit_with_error() {
    let output = run_relcheck(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("COMMITS") || stderr.contains("required"));
}

#[test]
fn help_shows_usage() {
    let output = run_relcheck(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("COMMITS"));
    assert!(stdout.contains("RELEVANT"));
    assert!(stdout.contains("--api-url"));
}

#[test]
fn malformed_commits_argument_exits_nonzero() {
    let output = run_relcheck(&["not-json", "[\"src\"]"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("COMMITS"));
}

#[test]
fn malformed_relevant_argument_exits_nonzero() {
    let cassette = write_cassette("bad_relevant", &[]);
    let output = run_relcheck_replaying(&cassette, &["[]", "{\"oops\": 1}"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("RELEVANT"));
}

#[test]
fn src_change_prints_true() {
    let cassette = write_cassette("scenario_a", &[("abc", &["src/main.go", "README.md"])]);
    let output = run_relcheck_replaying(&cassette, &["[\"abc\"]", "[\"src\"]"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "true\n");
}

#[test]
fn docs_only_change_prints_false() {
    let cassette = write_cassette("scenario_b", &[("abc", &["docs/index.md"])]);
    let output = run_relcheck_replaying(&cassette, &["[\"abc\"]", "[\"src\", \"lib\"]"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "false\n");
}

#[test]
fn workflow_change_matches_full_path() {
    let cassette = write_cassette(
        "scenario_c",
        &[("abc", &[".github/workflows/test.yml", "pkg/util.go"])],
    );
    let output =
        run_relcheck_replaying(&cassette, &["[\"abc\"]", "[\".github/workflows/test.yml\"]"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "true\n");
}

#[test]
fn dependabot_change_does_not_match_bare_github() {
    let cassette = write_cassette("scenario_d", &[("abc", &[".github/dependabot.yml"])]);
    let output = run_relcheck_replaying(&cassette, &["[\"abc\"]", "[\".github\"]"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "false\n");
}

#[test]
fn files_union_across_multiple_commits() {
    let cassette = write_cassette(
        "multi_commit",
        &[("abc", &["docs/index.md"]), ("def", &["api/src/lib.rs"])],
    );
    let output = run_relcheck_replaying(&cassette, &["[\"abc\", \"def\"]", "[\"api\"]"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "true\n");
}

#[test]
fn recorded_lookup_error_exits_nonzero() {
    let dir = std::env::temp_dir().join("relcheck_cli_test_error");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("commits.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "error", "test");
    recorder.record(
        "commits",
        "commit_detail",
        json!({"sha": "abc"}),
        json!({"Err": "Commit API error (404): Not Found"}),
    );
    recorder.finish().unwrap();

    let output = run_relcheck_replaying(&path, &["[\"abc\"]", "[\"src\"]"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("404"));
    assert!(output.stdout.is_empty());
}
