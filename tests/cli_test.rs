#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn alpha_utils(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alpha-utils"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run alpha-utils")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_text_output() {
    let output = alpha_utils(&["subtract-days", "2020-03-01", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "2020-02-29");

    let output = alpha_utils(&["remove-items", "--remove", "b", "a,b,c"]);
    assert_eq!(stdout(&output), "a,c");
}

#[test]
fn test_json_output() {
    let output = alpha_utils(&["--json", "valid-name", "_x9"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), r#"{"command":"valid-name","result":true}"#);
}

#[test]
fn test_false_name_exits_zero() {
    let output = alpha_utils(&["valid-name", "9x"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "false");
}

/// 日期錯誤 -> 1
#[test]
fn test_invalid_date_exits_one() {
    let output = alpha_utils(&["valid-date", "not-a-date"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not-a-date"));
}

/// 設定錯誤 -> 2
#[test]
fn test_bad_config_exits_two() {
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[output]\nformat = \"xml\"\n").unwrap();
    let path = config.path().to_str().unwrap();

    let output = alpha_utils(&["--config", path, "valid-name", "alpha"]);
    assert_eq!(output.status.code(), Some(2));
}

/// 檔案讀取錯誤 -> 3
#[test]
fn test_missing_config_exits_three() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let output = alpha_utils(&["--config", path.to_str().unwrap(), "valid-name", "alpha"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_json_from_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[output]\nformat = \"json\"\n").unwrap();
    let path = config.path().to_str().unwrap();

    let output = alpha_utils(&["--config", path, "subtract-days", "2017-11-10", "31"]);
    assert_eq!(
        stdout(&output),
        r#"{"command":"subtract-days","result":"2017-10-10"}"#
    );
}
