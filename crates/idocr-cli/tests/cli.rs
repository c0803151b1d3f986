//! End-to-end tests for the idocr binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn idocr() -> Command {
    Command::cargo_bin("idocr").unwrap()
}

#[test]
fn process_emits_fields_and_decision_as_json() {
    idocr()
        .args(["process", "tests/fixtures/capture.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ana Souza\""))
        .stdout(predicate::str::contains("\"cpf\": \"123.456.789-01\""))
        .stdout(predicate::str::contains(
            "\"affiliation\": \"JOAO DA SILVA E MARIA DA SILVA\"",
        ))
        .stdout(predicate::str::contains("\"decision\": \"accept\""));
}

#[test]
fn process_report_includes_summary_and_dump() {
    idocr()
        .args(["process", "tests/fixtures/capture.json", "--format", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Ana Souza"))
        .stdout(predicate::str::contains("block 1:"))
        .stdout(predicate::str::contains("\"CPF:\" (0.95)"))
        .stdout(predicate::str::contains("(n/a)"));
}

#[test]
fn threshold_override_forces_retake() {
    idocr()
        .args([
            "process",
            "tests/fixtures/capture.json",
            "--threshold",
            "0.95",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"decision\": \"retake\""));
}

#[test]
fn missing_input_fails() {
    idocr()
        .args(["process", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_csv_summary() {
    idocr()
        .args(["batch", "tests/fixtures/*.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "file,name,cpf,affiliation,verdict,mean_confidence,decision",
        ))
        .stdout(predicate::str::contains("Ana Souza"))
        .stdout(predicate::str::contains("legible"));
}

#[test]
fn config_init_then_show_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("idocr.json");

    idocr()
        .args(["config", "init", path.to_str().unwrap()])
        .assert()
        .success();

    idocr()
        .args(["--config", path.to_str().unwrap(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("legible_threshold"));
}
