//! Integration tests for the intervals command line tool

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn intervals() -> Command {
    Command::cargo_bin("intervals").unwrap()
}

#[test]
fn relate_closed_meets_open() {
    intervals()
        .args(["relate", "[6, 10]", "(10, 14)"])
        .assert()
        .success()
        .stdout("meets\n");
}

#[test]
fn relate_strict() {
    intervals()
        .args(["--strict", "relate", "[6, 10]", "(10, 14)"])
        .assert()
        .success()
        .stdout("before\n");
}

#[test]
fn binary_combinators() {
    let cases = [
        ("union", "[1, 3)", "[3, 5]", "[1, 5]\n"),
        ("intersect", "[1, 5]", "(3, 9)", "(3, 5]\n"),
        ("intersect", "[1, 2]", "[5, 6]", "none\n"),
        ("except", "(1, 4]", "(2, 4]", "(1, 2]\n"),
        ("gap", "[1, 3]", "[6, 9]", "(3, 6)\n"),
        ("gap", "[1, 3]", "[2, 9]", "none\n"),
    ];

    for (command, a, b, expected) in cases {
        intervals()
            .args([command, a, b])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn hull_of_arguments() {
    intervals()
        .args(["hull", "[2, 4]", "(6, 10)", "[3, 5]"])
        .assert()
        .success()
        .stdout("[2, 10)\n");
}

#[test]
fn canonicalize_shapes() {
    intervals()
        .args(["canonicalize", "(2, 4)", "--shape", "closed"])
        .assert()
        .success()
        .stdout("[3, 3]\n");

    intervals()
        .args(["canonicalize", "[2, 4]", "--shape", "closed-open"])
        .assert()
        .success()
        .stdout("[2, 5)\n");

    intervals()
        .args(["closure", "(-∞, 5)"])
        .assert()
        .success()
        .stdout("(-∞, 4]\n");

    intervals()
        .args(["interior", "(, )"])
        .assert()
        .success()
        .stdout("(-∞, ∞)\n");
}

#[test]
fn other_value_types() {
    intervals()
        .args(["--type", "date", "closure", "[2024-03-04, 2024-03-11)"])
        .assert()
        .success()
        .stdout("[2024-03-04, 2024-03-10]\n");

    intervals()
        .args(["-t", "float", "interior", "[0.5, 1.5]"])
        .assert()
        .success()
        .stdout("(-0.5, 2.5)\n");

    intervals()
        .args(["-t", "time", "relate", "[09:00:00, 12:00:00)", "[12:00:00, 13:00:00)"])
        .assert()
        .success()
        .stdout("meets\n");
}

#[test]
fn canonical_output_parses_back() {
    intervals()
        .args(["-t", "time", "interior", "[00:00:00, 01:00:00]"])
        .assert()
        .success()
        .stdout("[00:00:00, 01:00:01)\n");

    intervals()
        .args(["closure", "(2, 3)"])
        .assert()
        .success()
        .stdout("[2, 2)\n");

    intervals()
        .args(["closure", "[2, 2)"])
        .assert()
        .success()
        .stdout("[2, 2)\n");
}

#[test]
fn merge_from_stdin() {
    intervals()
        .arg("merge")
        .write_stdin("[8, 9)\n[1, 3]\n# comment\n\n[2, 5]\n")
        .assert()
        .success()
        .stdout("[1, 5]\n[8, 9)\n");
}

#[test]
fn complement_from_stdin() {
    intervals()
        .arg("complement")
        .write_stdin("[1, 3]\n(5, 8)\n")
        .assert()
        .success()
        .stdout("(-∞, 1)\n(3, 5]\n[8, ∞)\n");
}

#[test]
fn gaps_across_files() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "[1, 3]\n[10, 12]\n").unwrap();
    fs::write(&second, "[2, 4]\n").unwrap();

    intervals()
        .arg("gaps")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("(4, 10)\n");
}

#[test]
fn invalid_interval_fails() {
    intervals()
        .args(["relate", "[5, 1]", "[1, 2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval end lies before its start"));

    intervals()
        .args(["union", "1..2", "[1, 2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed interval"));
}

#[test]
fn bad_line_reports_location() {
    intervals()
        .arg("merge")
        .write_stdin("[1, 2]\n[x, 3]\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<stdin>:2"));
}

#[test]
fn missing_file_fails() {
    intervals()
        .args(["merge", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening does-not-exist.txt"));
}
