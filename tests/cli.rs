use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pgcred"));
    cmd.env_remove("PGCRED_PASSWORD");
    cmd
}

const VERIFIER_SHAPE: &str =
    r"^SCRAM-SHA-256\$4096:[A-Za-z0-9+/]+={0,2}\$[A-Za-z0-9+/]+={0,2}:[A-Za-z0-9+/]+={0,2}\n$";

#[test]
fn prints_scram_verifier() {
    bin()
        .arg("--username")
        .arg("alice")
        .arg("--password")
        .arg("secret")
        .assert()
        .success()
        .stdout(predicate::str::is_match(VERIFIER_SHAPE).unwrap());
}

#[test]
fn short_flags_work() {
    bin()
        .arg("-u")
        .arg("alice")
        .arg("-p")
        .arg("secret")
        .assert()
        .success()
        .stdout(predicate::str::is_match(VERIFIER_SHAPE).unwrap());
}

#[test]
fn verifiers_differ_between_runs() {
    let run = || {
        let output = bin()
            .arg("-u")
            .arg("alice")
            .arg("-p")
            .arg("secret")
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    // a fresh random salt per invocation
    assert_ne!(run(), run());
}

#[test]
fn password_from_environment() {
    bin()
        .env("PGCRED_PASSWORD", "secret")
        .arg("-u")
        .arg("alice")
        .assert()
        .success()
        .stdout(predicate::str::is_match(VERIFIER_SHAPE).unwrap());
}

#[test]
fn password_from_stdin() {
    bin()
        .arg("-u")
        .arg("alice")
        .write_stdin("secret\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(VERIFIER_SHAPE).unwrap());
}

#[test]
fn missing_password_fails() {
    bin()
        .arg("-u")
        .arg("alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no password provided"));
}

#[test]
fn missing_username_fails() {
    bin()
        .arg("-p")
        .arg("secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username"));
}
