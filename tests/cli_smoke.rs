use std::fs;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_titan").to_string()
}

fn titan(config_body: &str, args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("numerics.toml");
    fs::write(&cfg, config_body).unwrap();
    Command::new(bin())
        .arg("--config")
        .arg(cfg.to_str().unwrap())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("TITAN_DEBUG")
        .output()
        .expect("run")
}

fn stdout(o: &Output) -> String {
    assert!(
        o.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&o.stdout),
        String::from_utf8_lossy(&o.stderr)
    );
    String::from_utf8_lossy(&o.stdout).into_owned()
}

#[test]
fn det_uses_configured_precision() {
    let out = titan("precision = 2\n", &["det", "--matrix", "[[4,6],[3,8]]"]);
    assert_eq!(stdout(&out).trim(), "14.00");
}

#[test]
fn det_json() {
    let out = titan("", &["--json", "det", "--matrix", "[[4,6],[3,8]]"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v.as_f64(), Some(14.0));
}

#[test]
fn fft_json_reports_bins() {
    let out = titan("", &["--json", "fft", "1", "1", "1", "1", "0", "0", "0", "0"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let bins = v.as_array().expect("array of bins");
    assert_eq!(bins.len(), 8);
    assert_eq!(bins[0]["re"].as_f64(), Some(4.0));
}

#[test]
fn fft_rejects_odd_length() {
    let out = titan("", &["fft", "1", "2", "3"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("error:"), "stderr: {err}");
}

#[test]
fn zigzag_prints_integers() {
    let out = titan("", &["zigzag", "3"]);
    assert_eq!(stdout(&out).trim(), "9 8 4\n7 5 3\n6 2 1");
}

#[test]
fn checked_inverse_fails_on_singular_input() {
    let out = titan("", &["inverse", "--checked", "--matrix", "[[1,2],[2,4]]"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Singular Matrix"), "stderr: {err}");
}

#[test]
fn lup_json_has_three_factors() {
    let out = titan("", &["--json", "lup", "--matrix", "[[4,3],[6,3]]"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["p"], serde_json::json!([[0.0, 1.0], [1.0, 0.0]]));
    assert!(v["l"].is_array() && v["u"].is_array());
}

#[test]
fn vector_norm_orders() {
    let out = titan("precision = 1\n", &["norm", "--vector", "[3,-4]", "--order", "-inf"]);
    assert_eq!(stdout(&out).trim(), "3.0");
    let out = titan("precision = 1\n", &["norm", "--vector", "[3,-4]"]);
    assert_eq!(stdout(&out).trim(), "5.0");
    let out = titan("", &["norm", "--vector", "[3,-4]", "--order", "fro"]);
    assert!(!out.status.success());
}

#[test]
fn rref_notes_singular_on_stderr() {
    let out = titan("precision = 0\n", &["rref", "--matrix", "[[1,2],[2,4]]"]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("singular at pivot 1"));
    assert_eq!(stdout(&out).trim(), "2 4\n0 0");
}

#[test]
fn roots_prints_one_per_line() {
    let out = titan("precision = 3\n", &["roots", "-4", "0", "2"]);
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["0.000 + 2.000i", "0.000 - 2.000i"]);
}
