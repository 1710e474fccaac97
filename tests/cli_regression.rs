// Regression test: Ensure CLI errors are rendered with miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_parses_fixture_specification() {
    let mut cmd = Command::cargo_bin("mlspec").unwrap();
    cmd.arg("parse").arg("tests/fixtures/list_insert.mls");
    cmd.assert()
        .success()
        .stdout(contains("nat").and(contains("[Nil,0] -> Cons(0,Nil)")));
}

#[test]
fn cli_lists_canonical_examples() {
    let mut cmd = Command::cargo_bin("mlspec").unwrap();
    cmd.arg("examples").arg("tests/fixtures/list_insert.mls");
    cmd.assert()
        .success()
        .stdout(contains("[Cons(1,Nil),2] -> Cons(1,Cons(2,Nil))"));
}

#[test]
fn cli_check_walks_directories() {
    let mut cmd = Command::cargo_bin("mlspec").unwrap();
    cmd.arg("check").arg("tests/fixtures");
    cmd.assert()
        .success()
        .stdout(contains("1 checked: 1 passed, 0 failed"));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    // Create a temporary specification with a payload-less tree node
    let bad_file = "tests/bad_example.mls";
    fs::write(
        bad_file,
        "synth tree -> tree satisfying\n[Node(Leaf,Leaf)] -> Leaf,\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mlspec").unwrap();
    cmd.arg("parse").arg(bad_file);
    cmd.assert()
        .failure()
        .stderr(contains("mlspec::shape").or(contains("payload")));

    // Clean up
    let _ = fs::remove_file(bad_file);
}
