// tests/cli/failures.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn chandas() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chandas"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn corrupt_pdf_fails_to_parse() {
    let ws = TempWorkspace::new("chandas_pdf");
    let pdf = ws.file("poem.pdf", b"%PDF-1.7");

    chandas()
        .arg(&pdf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse the PDF document"))
        .stderr(predicate::str::contains("poem.pdf"));
}

#[test]
fn rtf_input_is_unsupported() {
    let ws = TempWorkspace::new("chandas_rtf");
    let rtf = ws.file("poem.rtf", b"{\\rtf1}");

    chandas()
        .arg(&rtf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document type 'rtf'"));
}

#[test]
fn missing_file_fails() {
    chandas()
        .arg("/no/such/poem.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn max_ngram_out_of_range() {
    chandas()
        .args(["--max-ngram", "16"])
        .write_stdin("ಕ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-ngram"));
}

#[test]
fn strict_script_rejects_latin_text() {
    chandas()
        .arg("--strict-script")
        .write_stdin("hello world")
        .assert()
        .failure()
        .stderr(predicate::str::contains("looks garbled"));
}

#[test]
fn unknown_mode_is_a_usage_error() {
    chandas().args(["--mode", "metre"]).assert().code(2);
}

#[test]
fn failed_run_leaves_no_output_file() {
    let ws = TempWorkspace::new("chandas_fail");
    let docx = ws.file("poem.docx", b"PK");
    let report = ws.path().join("report.txt");

    chandas().arg(&docx).arg("-o").arg(&report).assert().failure();
    assert!(!report.exists());
}
