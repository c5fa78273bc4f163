//! Runs the `league` binary end to end

use std::process::{Command, Output};

fn league(data: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_league"))
        .arg("--data")
        .arg(data)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run league")
}

#[test]
fn test_season_from_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("league.json");

    assert!(league(&data, &["add-team", "Arsenal", "--owner", "Alice"]).status.success());
    assert!(league(&data, &["add-team", "Chelsea", "--owner", "Bob"]).status.success());
    let generated = league(&data, &["generate", "--seed", "3"]);
    assert!(generated.status.success());
    assert_eq!(
        String::from_utf8_lossy(&generated.stdout).trim(),
        "Generated 2 fixtures"
    );

    let standings = league(&data, &["standings"]);
    let text = String::from_utf8_lossy(&standings.stdout);
    assert!(text.contains("Arsenal"));
    assert!(text.contains("Progress: 0%"));
}

#[test]
fn test_bad_score_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("league.json");

    let output = league(&data, &["record", "m-1", "three", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid score"));
}
