// Integration tests for `powersum check` / `powersum validate`.
// Run with: cargo test -p powersum-cli --test check_tests -- --nocapture

use std::path::PathBuf;
use std::process::{Command, Output};

use httpmock::prelude::*;

fn powersum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_powersum"));
    cmd.current_dir(fixtures_dir());
    cmd.env_remove("POWERSUM_REFERENCE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run(args: &[&str]) -> Output {
    powersum().args(args).output().expect("run powersum")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Human report
// ---------------------------------------------------------------------------

#[test]
fn clean_run_reports_all_valid() {
    let out = run(&["check", "--results", "cubes.results.txt", "--reference", "cubes.reference.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Validating solutions"));
    assert!(text.contains("Checked 7 total solutions, found 7 valid solutions."));
    assert!(text.contains("Known solutions: 7"));
    assert!(text.contains("Found solutions: 7"));
    assert!(!text.contains("Missing"));
    assert!(!text.contains("INVALID"));
    assert!(text.ends_with("Result: PASS\n"));
    // piped stdout: no colour
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn drift_is_reported_but_exit_is_zero() {
    let out = run(&["check", "-r", "cubes-drift.results.txt", "--reference", "cubes.reference.txt"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("INVALID SOLUTION: 1^3 + 2^3 = 3^3 + 4^3 = 100"));
    assert!(text.contains("Checked 6 total solutions, found 5 valid solutions."));
    assert!(text.contains("2 solutions in known but not found:\n  Missing: 20683\n  Missing: 40033\n"));
    assert!(text.contains("1 solutions in found but not in known:\n  Extra: 100\n"));
    assert!(text.ends_with("Result: FAIL (1 invalid, 2 missing, 1 extra)\n"));
}

#[test]
fn empty_reference_lists_every_sum_as_extra() {
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", "empty.reference.txt"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("Known solutions: 0"));
    assert!(text.contains("7 solutions in found but not in known:"));
    assert!(text.contains("  Extra: 40033"));
}

#[test]
fn exponent_flag_changes_predicate() {
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", "cubes.reference.txt", "-n", "4"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("found 0 valid solutions"));
    assert!(stdout(&out).contains("INVALID SOLUTION: 1^4 + 12^4"));
}

#[test]
fn zero_exponent_rejected_by_parser() {
    let out = run(&["check", "-n", "0"]);
    assert_eq!(out.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// Strict mode
// ---------------------------------------------------------------------------

#[test]
fn strict_invalid_exits_3() {
    let out = run(&["check", "-r", "cubes-drift.results.txt", "--reference", "cubes.reference.txt", "--strict"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("1 invalid solution(s)"));
    // report still printed before the exit
    assert!(stdout(&out).contains("Missing: 20683"));
}

#[test]
fn strict_mismatch_exits_4() {
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", "empty.reference.txt", "--strict"]);
    assert_eq!(out.status.code(), Some(4));
    assert!(stderr(&out).contains("0 missing, 7 extra"));
}

#[test]
fn strict_clean_exits_0() {
    let out = run(&["check", "-c", "check.toml", "--strict"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn malformed_results_abort_with_hint() {
    let out = run(&["check", "-r", "malformed.results.txt", "--reference", "cubes.reference.txt"]);
    assert_eq!(out.status.code(), Some(5));
    let err = stderr(&out);
    assert!(err.contains("results line 2"));
    assert!(err.contains("--skip-malformed"));
}

#[test]
fn skip_malformed_continues() {
    let out = run(&[
        "check", "-r", "malformed.results.txt", "--reference", "cubes.reference.txt", "--skip-malformed",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Skipped 1 malformed line(s) in results."));
    assert!(text.contains("Checked 2 total solutions, found 2 valid solutions."));
}

#[test]
fn missing_results_file_exits_5() {
    let out = run(&["check", "-r", "nope.txt", "--reference", "cubes.reference.txt"]);
    assert_eq!(out.status.code(), Some(5));
    assert!(stderr(&out).contains("cannot read results"));
}

#[test]
fn missing_reference_file_exits_6_without_reconciling() {
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", "nope.reference.txt"]);
    assert_eq!(out.status.code(), Some(6));
    assert!(stderr(&out).contains("reference unavailable"));
    // validation ran; reconciliation did not
    assert!(stdout(&out).contains("Checked 7 total solutions"));
    assert!(!stdout(&out).contains("Known solutions"));
}

// ---------------------------------------------------------------------------
// HTTP reference
// ---------------------------------------------------------------------------

#[test]
fn url_reference_is_fetched() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/b.txt");
        then.status(200).body(std::fs::read_to_string(fixtures_dir().join("cubes.reference.txt")).unwrap());
    });

    let url = server.url("/b.txt");
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", &url, "--timeout", "10"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Known solutions: 7"));
    mock.assert();
}

#[test]
fn url_reference_http_error_exits_6() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/b.txt");
        then.status(500);
    });

    let url = server.url("/b.txt");
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", &url]);
    assert_eq!(out.status.code(), Some(6));
    assert!(stderr(&out).contains("HTTP 500"));
    mock.assert_hits(1);
}

#[test]
fn url_reference_garbage_exits_7() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/b.txt");
        then.status(200).body("<html>\n<body> oops </body>\n</html>\n");
    });

    let url = server.url("/b.txt");
    let out = run(&["check", "-r", "cubes.results.txt", "--reference", &url]);
    assert_eq!(out.status.code(), Some(7));
}

// ---------------------------------------------------------------------------
// JSON + config
// ---------------------------------------------------------------------------

#[test]
fn json_output_contract() {
    let out = run(&["check", "-r", "cubes-drift.results.txt", "--reference", "cubes.reference.txt", "--json"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    assert_eq!(v["meta"]["exponent"], 3);
    assert_eq!(v["summary"]["total"], 6);
    assert_eq!(v["summary"]["valid"], 5);
    assert_eq!(v["summary"]["passed"], false);
    assert_eq!(v["reconciliation"]["missing"], serde_json::json!(["20683", "40033"]));
    assert_eq!(v["reconciliation"]["extra"], serde_json::json!(["100"]));
    assert_eq!(v["validation"]["invalid"][0]["line"], 3);
}

#[test]
fn output_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let out = run(&["check", "-c", "check.toml", "--output", path.to_str().unwrap()]);
    assert!(out.status.success());
    // human report still on stdout
    assert!(stdout(&out).contains("Validating solutions"));

    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["summary"]["passed"], true);
}

#[test]
fn config_paths_resolve_relative_to_config() {
    let out = Command::new(env!("CARGO_BIN_EXE_powersum"))
        .current_dir(std::env::temp_dir())
        .env_remove("POWERSUM_REFERENCE")
        .args(["check", "-c", fixtures_dir().join("check.toml").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Known solutions: 7"));
}

#[test]
fn flag_paths_resolve_relative_to_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("check.toml");
    std::fs::write(&config, "exponent = 3\n").unwrap();

    let out = run(&[
        "check",
        "-c",
        config.to_str().unwrap(),
        "-r",
        "cubes.results.txt",
        "--reference",
        "cubes.reference.txt",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Checked 7 total solutions, found 7 valid solutions."));
    assert!(stdout(&out).contains("Known solutions: 7"));
}

#[test]
fn oversized_exponent_is_usage_error() {
    let out = run(&["check", "-n", "4000000000"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("exceeds the maximum of 1000"));
}

#[test]
fn validate_accepts_good_config() {
    let out = run(&["validate", "check.toml"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("valid: n=3"));
}

#[test]
fn validate_rejects_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "exponent = 0\n").unwrap();
    let out = run(&["validate", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("exponent must be a positive integer"));
}

#[test]
fn no_command_is_usage_error() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
}
