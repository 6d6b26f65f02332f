//! Integration tests for the `fixly` CLI binary.
//!
//! Argument parsing, help output, shell completions, and the full
//! offline data path (no server configured → local store), all without
//! a live workshop server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `fixly` binary with env isolation.
///
/// Clears all `FIXLY_*` env vars and points HOME/XDG at a nonexistent
/// path so tests never touch the user's real configuration.
fn fixly_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fixly");
    cmd.env("HOME", "/tmp/fixly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/fixly-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/fixly-cli-test-nonexistent")
        .env_remove("FIXLY_SERVER")
        .env_remove("FIXLY_API_TOKEN")
        .env_remove("FIXLY_DATA_DIR")
        .env_remove("FIXLY_OUTPUT")
        .env_remove("FIXLY_TIMEOUT");
    cmd
}

/// Same, but with a dedicated data directory for functional flows.
fn fixly_in(data_dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = fixly_cmd();
    cmd.env("FIXLY_DATA_DIR", data_dir);
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = fixly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    fixly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("devices")
            .and(predicate::str::contains("parts"))
            .and(predicate::str::contains("advice"))
            .and(predicate::str::contains("status")),
    );
}

#[test]
fn test_version_flag() {
    fixly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fixly"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    fixly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    fixly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Offline data path ───────────────────────────────────────────────

#[test]
fn test_device_intake_and_list_offline() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args([
            "-o", "plain", "devices", "add", "Ivanov", "Vacuum X1",
            "--issue", "does not power on",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let id = stdout_str(&output);
    assert_eq!(id.len(), 36, "plain output should be the bare UUID: {id}");

    // The record survives into a second process reading the same slots.
    let output = fixly_in(dir.path())
        .args(["-o", "json", "devices", "list"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let devices: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["clientName"], "Ivanov");
    assert_eq!(devices[0]["status"], "RECEIVED");
    assert_eq!(devices[0]["id"], id.as_str());
}

#[test]
fn test_status_transition_by_id_prefix() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args(["-o", "plain", "devices", "add", "Petrov", "Amp A2"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let id = stdout_str(&output);
    let prefix = &id[..8];

    let output = fixly_in(dir.path())
        .args(["-o", "json", "devices", "set-status", prefix, "ready"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let device: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(device["status"], "READY");
    assert_eq!(device["id"], id.as_str());
}

#[test]
fn test_parts_to_buy_flow() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args([
            "-o", "plain", "parts", "add", "IRF540", "--type", "transistor",
            "--subtype", "n-mosfet",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let id = stdout_str(&output);

    // Nothing flagged yet.
    fixly_in(dir.path())
        .args(["-o", "plain", "parts", "to-buy"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().or(predicate::str::is_match("^\\s*$").unwrap()));

    // Flag the line and find it on the shopping list.
    fixly_in(dir.path())
        .args(["-q", "parts", "set-stock", &id[..8], "out"])
        .assert()
        .success();

    let output = fixly_in(dir.path())
        .args(["-o", "json", "parts", "to-buy"])
        .output()
        .unwrap();
    let parts: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parts.as_array().unwrap().len(), 1);
    assert_eq!(parts[0]["name"], "IRF540");
    assert_eq!(parts[0]["inStock"], false);
}

#[test]
fn test_delete_requires_confirmation_when_piped() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args(["-o", "plain", "devices", "add", "Ivanov", "Vacuum X1"])
        .output()
        .unwrap();
    let id = stdout_str(&output);

    // Non-interactive stdin without --yes must refuse, not hang.
    let output = fixly_in(dir.path())
        .args(["devices", "delete", &id])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));

    // With --yes the record goes away.
    fixly_in(dir.path())
        .args(["--yes", "devices", "delete", &id])
        .assert()
        .success();

    fixly_in(dir.path())
        .args(["-o", "plain", "devices", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().or(predicate::str::is_match("^\\s*$").unwrap()));
}

#[test]
fn test_intake_rejects_blank_client() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args(["devices", "add", "  ", "Vacuum X1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "validation is a usage error");
    assert!(combined_output(&output).contains("clientName"));
}

#[test]
fn test_status_reports_offline() {
    let dir = tempfile::tempdir().unwrap();

    fixly_in(dir.path())
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Offline"));
}

#[test]
fn test_advice_falls_back_offline() {
    let dir = tempfile::tempdir().unwrap();

    // No server, so the assistant degrades to the fallback message --
    // and still exits 0.
    fixly_in(dir.path())
        .args(["advice", "TV has sound but no image"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Reference data ──────────────────────────────────────────────────

#[test]
fn test_part_subtypes_catalog() {
    fixly_cmd()
        .args(["-o", "plain", "parts", "subtypes", "capacitor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("electrolytic"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args(["devices", "show", "deadbeef"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("not found"));
}

#[test]
fn test_invalid_output_format() {
    let output = fixly_cmd()
        .args(["--output", "invalid", "devices", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_status_value() {
    let dir = tempfile::tempdir().unwrap();

    let output = fixly_in(dir.path())
        .args(["devices", "set-status", "deadbeef", "exploded"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("possible values") || text.contains("invalid"),
        "Expected clap to reject the status value:\n{text}"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    fixly_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("set-status"))
                .and(predicate::str::contains("planned"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_parts_subcommands_exist() {
    fixly_cmd()
        .args(["parts", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("to-buy"))
                .and(predicate::str::contains("subtypes")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    fixly_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set-token")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` renders the defaults even with no file present.
    fixly_cmd().args(["config", "show"]).assert().success();
}
