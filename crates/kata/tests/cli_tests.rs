//! End-to-end tests for the `kata` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `kata` command isolated from the user's global and project config.
fn kata(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kata").expect("binary built");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("KATA_OUTPUT")
        .env_remove("KATA_FAIL_FAST")
        .env_remove("KATA_SUITE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_prints_sum() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["add", "2", "3"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_add_accepts_negative_numbers() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["add", "-1", "1"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_is_even_prints_boolean() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["is-even", "-2"])
        .assert()
        .success()
        .stdout("true\n");
    kata(&home)
        .args(["is-even", "7"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_reverse_and_palindrome() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["reverse", "hello"])
        .assert()
        .success()
        .stdout("olleh\n");
    kata(&home)
        .args(["is-palindrome", "A man, a plan, a canal, Panama"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_find_max_and_dedupe() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["find-max", "3", "-5", "10", "0"])
        .assert()
        .success()
        .stdout("10\n");
    kata(&home)
        .args(["remove-duplicates", "a", "b", "a"])
        .assert()
        .success()
        .stdout("[a, b]\n");
}

#[test]
fn test_email_heuristic() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["is-valid-email", "user@example.com"])
        .assert()
        .success()
        .stdout("true\n");
    kata(&home)
        .args(["is-valid-email", "user@domain"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_largest_factorial_prints_full_value() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["factorial", "34"])
        .assert()
        .success()
        .stdout("295232799039604140847618609643520000000\n");
    kata(&home)
        .args(["--json", "factorial", "34"])
        .assert()
        .success()
        .stdout(
            "{\"operation\":\"factorial\",\"result\":295232799039604140847618609643520000000}\n",
        );
}

#[test]
fn test_factorial_past_u128_overflows() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["factorial", "35"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn test_negative_factorial_fails_with_message() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["factorial", "-3"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Factorial is undefined for negative input: -3",
        ));
}

#[test]
fn test_empty_find_max_json_error_line() {
    let home = TempDir::new().unwrap();
    let output = kata(&home)
        .args(["--json", "find-max"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["operation"], "find_max");
    assert_eq!(value["error"]["code"], "empty_sequence");
}

#[test]
fn test_json_output_from_project_config() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".kata")).unwrap();
    std::fs::write(home.path().join(".kata/config.toml"), "output = \"json\"\n").unwrap();

    kata(&home)
        .args(["factorial", "5"])
        .assert()
        .success()
        .stdout("{\"operation\":\"factorial\",\"result\":120}\n");
}

#[test]
fn test_check_builtin_battery_passes() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS add two positives"))
        .stdout(predicate::str::contains(" 0 failed"));
}

#[test]
fn test_check_suite_file_reports_failure() {
    let home = TempDir::new().unwrap();
    let suite = home.path().join("cases.toml");
    std::fs::write(
        &suite,
        r#"
[[case]]
name = "wrong vowel count"
op = "count_vowels"
text = "Hello World"
expect = 2

[[case]]
name = "never reached"
op = "is_even"
n = 0
expect = true
"#,
    )
    .unwrap();

    kata(&home)
        .args(["check", "--fail-fast", "--suite"])
        .arg(&suite)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "FAIL wrong vowel count: Expected: 2, Actual: 3",
        ))
        .stdout(predicate::str::contains("0 passed, 1 failed, 1 skipped"));
}

#[test]
fn test_check_json_report() {
    let home = TempDir::new().unwrap();
    let output = kata(&home)
        .args(["check", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["failed"], 0);
    assert!(value["passed"].as_u64().unwrap() > 0);
}

#[test]
fn test_check_missing_suite_is_io_error() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .args(["check", "--suite", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read suite file"));
}

#[test]
fn test_invalid_env_config_fails() {
    let home = TempDir::new().unwrap();
    kata(&home)
        .env("KATA_OUTPUT", "yaml")
        .args(["add", "1", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
