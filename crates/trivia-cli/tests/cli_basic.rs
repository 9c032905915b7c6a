//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn cli(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trivia-cli"));
    cmd.env("TRIVIA_CONFIG_DIR", config_dir);
    cmd
}

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = cli(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn last_json_line(stdout: &str) -> serde_json::Value {
    let line = stdout.lines().last().expect("no output");
    serde_json::from_str(line).expect("last line is not JSON")
}

#[test]
fn test_questions_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["questions", "--json"]);
    assert_eq!(code, 0, "questions failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let questions = parsed.as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert_eq!(questions[0]["correct_answer"], "Paris");
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "quiz.time_limit_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "60");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "quiz.time_limit_secs", "90"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "quiz.time_limit_secs"]);
    assert_eq!(stdout.trim(), "90");
}

#[test]
fn test_config_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "quiz.time_limit_secs", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));

    let (code, _, _) = run_cli(dir.path(), &["config", "get", "quiz.unknown"]);
    assert_ne!(code, 0);
}

#[test]
fn test_options_set_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["options", "set", "--category", "science", "--questions", "10"],
    );
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["options", "show", "--json"]);
    assert_eq!(code, 0);
    let options: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(options["category"], "science");
    assert_eq!(options["number_of_questions"], 10);
}

#[test]
fn test_play_submit_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = cli(dir.path())
        .args(["play", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"1 1\n2 2\n4 2\nsubmit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(result["score"], 2);
    assert_eq!(result["total"], 6);
    assert_eq!(result["answered"], 3);
    assert_eq!(result["trigger"], "user");
}

#[test]
fn test_play_auto_submits_on_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "quiz.tick_interval_ms", "10"]);
    assert_eq!(code, 0);

    let mut child = cli(dir.path())
        .args(["play", "--json", "--time-limit", "3"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    // Hold stdin open so only the countdown can end the game.
    let stdin = child.stdin.take();

    let output = child.wait_with_output().unwrap();
    drop(stdin);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("\"type\":\"timer_expired\""));
    let result = last_json_line(&stdout);
    assert_eq!(result["score"], 0);
    assert_eq!(result["trigger"], "expiry");
}

#[test]
fn test_play_status_prints_progress() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "display.announce_every_secs", "0"]);
    assert_eq!(code, 0);

    let mut child = cli(dir.path())
        .args(["play", "--time-limit", "60"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"1 1\nstatus\nsubmit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let status = stdout
        .lines()
        .position(|l| l.ends_with("(1/6 answered)"))
        .expect("status line missing");
    let score = stdout
        .lines()
        .position(|l| l == "Your score: 1/6")
        .expect("score line missing");
    assert!(status < score);
}
