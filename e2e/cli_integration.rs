// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `ccx-params` binary as a black box with std::process::Command and
// checks the exit status for every result category, plus the help, version
// and configuration-dump output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `ccx-params` binary produced by Cargo.
fn ccx_bin() -> PathBuf {
    if let Some(p) = option_env!("CARGO_BIN_EXE_ccx-params") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push(format!("ccx-params{}", std::env::consts::EXE_SUFFIX));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(ccx_bin()).args(args).output().expect("failed to run ccx-params")
}

fn code(args: &[&str]) -> i32 {
    run(args).status.code().expect("terminated by signal")
}

/// Status as observed by the parent; Unix keeps only the low byte.
fn observed(code: i32) -> i32 {
    if cfg!(unix) {
        code & 0xff
    } else {
        code
    }
}

// ── 1. Success and help ──────────────────────────────────────────────────────

#[test]
fn valid_configuration_exits_zero() {
    assert_eq!(code(&["--srt", "--service", "1,2", "input.ts"]), 0);
}

#[test]
fn help_and_version_exit_eleven() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(11));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Usage:"));

    let out = run(&["--version"]);
    assert_eq!(out.status.code(), Some(11));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("detailed version info"));
    assert!(text.contains("File SHA256:"));
}

// ── 2. Error categories ──────────────────────────────────────────────────────

#[test]
fn no_input_files_exits_two() {
    assert_eq!(code(&[]), 2);
    assert_eq!(code(&["--srt"]), 2);
}

#[test]
fn too_many_inputs_exits_three() {
    assert_eq!(code(&["a.ts", "--udp", "1234"]), 3);
    assert_eq!(code(&["a.ts", "b.ts", "--stream", "10"]), 3);
}

#[test]
fn incompatible_or_unknown_exits_four() {
    assert_eq!(code(&["--no-such-flag", "a.ts"]), 4);
    assert_eq!(code(&["--in=raw", "--out=raw", "a.raw"]), 4);
}

#[test]
fn malformed_parameter_exits_seven() {
    assert_eq!(code(&["--delay", "abc", "a.ts"]), 7);
    assert_eq!(code(&["--service", "99", "a.ts"]), 7);
    assert_eq!(code(&["--mkvlang", "en", "a.ts"]), 7);
    assert_eq!(code(&["a.ts", "--startat"]), 7);
}

#[test]
fn unclassified_exits_three_hundred() {
    assert_eq!(code(&["--tpage", "950", "a.ts"]), observed(300));
}

#[test]
fn word_file_error_exits_501() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    assert_eq!(code(&["--capfile", missing.to_str().unwrap(), "a.ts"]), observed(501));
}

// ── 3. Output streams ────────────────────────────────────────────────────────

#[test]
fn error_message_names_flag() {
    let out = run(&["--delay", "abc", "a.ts"]);
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("--delay"), "stderr was: {err}");
}

#[test]
fn debug_dumps_configuration() {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "Gotham\n").unwrap();
    let out = run(&["--debug", "--capfile", words.to_str().unwrap(), "a.ts"]);
    assert_eq!(out.status.code(), Some(0));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Gotham"));
    assert!(err.contains("input_files"));
}

#[test]
fn quiet_suppresses_dump() {
    let out = run(&["--quiet", "--debug", "a.ts"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}
