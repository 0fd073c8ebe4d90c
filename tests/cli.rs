#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn odsgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_odsgen"))
}

#[test]
fn writes_spreadsheet_from_json() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.ods");
    fs::write(&input, r#"[[["a", "b"]]]"#).expect("write input");

    let result = odsgen()
        .arg(&input)
        .arg(&output)
        .env("RUST_LOG", "debug")
        .output()
        .expect("run odsgen");

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let bytes = fs::read(&output).expect("output written");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn writes_spreadsheet_from_yaml_with_log_level_flag() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("in.yaml");
    let output = dir.path().join("out.ods");
    fs::write(&input, "- - [1, 2.5, x]\n").expect("write input");

    let status = odsgen()
        .arg(&input)
        .arg(&output)
        .args(["--log-level", "info"])
        .env_remove("RUST_LOG")
        .status()
        .expect("run odsgen");

    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn malformed_style_exits_with_error() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.ods");
    fs::write(
        &input,
        r#"{"styles": [{"name": "bad", "definition": "<style:style"}], "body": []}"#,
    )
    .expect("write input");

    let result = odsgen().arg(&input).arg(&output).output().expect("run odsgen");

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("bad"));
    assert!(!output.exists());
}

#[test]
fn missing_output_argument_is_usage_error() {
    let status = odsgen()
        .arg("only-input.json")
        .status()
        .expect("run odsgen");
    assert!(!status.success());
}
