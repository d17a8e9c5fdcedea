use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn check_flags_import_bypassing_index_text() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/closest_index",
            "--format",
            "text",
            "--quiet",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("src/a/user.js"))
        .stdout(predicate::str::contains(
            "Expected to import \"src/a/lib/index.js\".",
        ))
        .stdout(predicate::str::contains("1 finding in 1 file"));
}

#[test]
fn consumer_inside_index_scope_is_not_flagged() {
    // consumer.js lives under lib/, which owns lib/index.js
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/closest_index",
            "--format",
            "text",
            "--quiet",
        ])
        .assert()
        .stdout(predicate::str::contains("consumer.js").not());
}

#[test]
fn check_closest_index_json() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/closest_index",
            "--format",
            "json",
            "--quiet",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"finding_count\": 1"))
        .stdout(predicate::str::contains("\"rule\": \"closest-index\""))
        .stdout(predicate::str::contains("src/a/lib/index.js"));
}

#[test]
fn check_closest_index_sarif() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/closest_index",
            "--format",
            "sarif",
            "--quiet",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sarif-schema-2.1.0"))
        .stdout(predicate::str::contains("indexwise/closest-index"));
}

#[test]
fn clean_tree_exits_zero() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args(["check", "tests/fixtures/clean", "--format", "text", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 findings"));
}

#[test]
fn require_name_rule_reads_config_table() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/require_name",
            "--format",
            "text",
            "--quiet",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Expected \"wrong\" to be \"AAA\"."))
        .stdout(predicate::str::contains(
            "Expected \"user\" to be \"userService\".",
        ));
}

#[test]
fn rule_filter_restricts_to_one_rule() {
    // Only the closest-index rule runs; the name table is ignored.
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/require_name",
            "--rule",
            "closest-index",
            "--format",
            "text",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 findings"));
}

#[test]
fn unknown_rule_is_a_usage_error() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args(["check", ".", "--rule", "no-such-rule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rule"));
}

#[test]
fn missing_path_exits_two() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args(["check", "tests/fixtures/does_not_exist", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No checkable files"));
}

#[test]
fn exclude_glob_drops_offending_file() {
    Command::cargo_bin("indexwise")
        .unwrap()
        .args([
            "check",
            "tests/fixtures/closest_index",
            "--exclude",
            "user.js",
            "--format",
            "text",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 findings"));
}
