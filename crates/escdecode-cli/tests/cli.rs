use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("escdecode"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_input(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.csv")
}

#[test]
fn help_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--threshold").and(contains("--ignore-addrs")));
}

#[test]
fn version_flags_print_package_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains("escdecode"));
}

#[test]
fn long_version_includes_commit_and_date() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("commit: ").and(contains("built: ")));
}

#[test]
fn text_output_matches_golden_lines() {
    let expected = fs::read_to_string(
        repo_root()
            .join("tests")
            .join("golden")
            .join("basic")
            .join("expected.txt"),
    )
    .expect("read expected.txt");

    let assert = cmd()
        .arg(golden_input("basic"))
        .arg("--no-color")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout, expected);
}

#[test]
fn ignore_flag_suppresses_packets() {
    cmd()
        .arg(golden_input("ignored"))
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("unsupported ESC action: NOP"));

    cmd()
        .arg(golden_input("ignored"))
        .arg("--no-color")
        .arg("-i")
        .arg("0x0")
        .assert()
        .success()
        .stdout(contains("mcu WRITE reg:0x494").and(contains("NOP").not()));
}

#[test]
fn config_file_is_applied_and_flags_override_it() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"ignore_addrs": ["bogus"]}"#).expect("write config");

    cmd()
        .arg(golden_input("ignored"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));

    fs::write(&config, r#"{"threshold_us": 4, "ignore_addrs": [0]}"#).expect("write config");
    cmd()
        .arg(golden_input("ignored"))
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("NOP").not());

    cmd()
        .arg(golden_input("ignored"))
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .arg("-i")
        .arg("0x494")
        .assert()
        .success()
        .stdout(contains("unsupported ESC action: NOP").and(contains("0x494").not()));
}

#[test]
fn json_format_emits_one_object_per_line() {
    let assert = cmd()
        .arg(golden_input("basic"))
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json line"))
        .collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0]["action"], "WRITE");
    assert_eq!(lines[0]["address"], 0x0F80);
    assert_eq!(lines[0]["time_ns"], 1000);
    assert_eq!(lines[2]["error"], "invalid_action");
    assert_eq!(lines[3]["error"], "framing");
    assert_eq!(lines[4]["error"], "malformed_sample");
    assert_eq!(lines[7]["error"], "unsupported_action");
    assert!(
        lines[7]["reason"]
            .as_str()
            .expect("reason string")
            .contains("NOP")
    );
}

#[test]
fn strict_fails_on_decode_errors() {
    cmd()
        .arg(golden_input("basic"))
        .arg("--no-color")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("decode failures detected"));

    cmd()
        .arg(golden_input("ignored"))
        .arg("--no-color")
        .arg("--strict")
        .arg("-i")
        .arg("0")
        .assert()
        .success();
}

#[test]
fn zero_threshold_is_rejected() {
    cmd()
        .arg(golden_input("basic"))
        .arg("-t")
        .arg("0")
        .assert()
        .failure();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.csv");

    cmd()
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn non_csv_input_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.txt");
    fs::write(&input, "Time[ns],0:SPI: MISO data,0:SPI: MOSI data\n").expect("write input");

    cmd()
        .arg(input)
        .assert()
        .failure()
        .stderr(contains("unsupported input format").and(contains(".csv")));
}

#[test]
fn glob_must_match_exactly_one_file() {
    let temp = TempDir::new().expect("tempdir");
    let source = fs::read_to_string(golden_input("ignored")).expect("read input");
    fs::write(temp.path().join("run1.csv"), &source).expect("write run1");

    let pattern = temp.path().join("run*.csv");
    cmd()
        .arg(&pattern)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("mcu WRITE reg:0x494"));

    fs::write(temp.path().join("run2.csv"), &source).expect("write run2");
    cmd()
        .arg(&pattern)
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn missing_columns_are_reported() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.csv");
    fs::write(&input, "Id,Time[ns],0:SPI: MOSI data\n0,1000,A2\n").expect("write input");

    cmd()
        .arg(input)
        .assert()
        .failure()
        .stderr(contains("failed to open capture").and(contains("hint:")));
}

#[test]
fn config_without_threshold_uses_cli_default() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.csv");
    fs::write(
        &input,
        "Id,Time[ns],0:SPI: MOSI data,0:SPI: MISO data\n0,1000,A2,00\n1,8000,24,01\n",
    )
    .expect("write input");
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"ignore_addrs": [544]}"#).expect("write config");

    cmd()
        .arg(&input)
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("mcu WRITE reg:0x494").and(contains("packet too short").not()));

    cmd()
        .arg(&input)
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .arg("-t")
        .arg("4")
        .assert()
        .success()
        .stdout(contains("packet too short"));
}
