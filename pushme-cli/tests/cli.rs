//! Binary-level argument handling tests. Nothing here touches the network;
//! validation failures happen before any request goes out.

use assert_cmd::Command;
use predicates::prelude::*;

fn pushme() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pushme"))
}

#[test]
fn help_lists_the_commands() {
    pushme()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("poll"));
}

#[test]
fn send_requires_a_topic_secret() {
    pushme()
        .args(["send", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--secret"));
}

#[test]
fn send_rejects_an_unknown_category() {
    pushme()
        .args([
            "send",
            "hello",
            "--secret",
            "s",
            "--category",
            "fake.category",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn send_rejects_malformed_data() {
    pushme()
        .args(["send", "hello", "--secret", "s", "--data", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data is not valid JSON"));
}

#[test]
fn status_requires_a_push_ident() {
    pushme().arg("status").assert().failure();
}
