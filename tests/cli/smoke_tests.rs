// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{SAMPLE_POEM, TempWorkspace};

fn chandas() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chandas"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    chandas()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chandas"))
        .stdout(predicate::str::contains("--max-ngram"));
}

#[test]
fn shows_version() {
    chandas().arg("--version").assert().success().stdout(predicate::str::contains(chandas::VERSION));
}

#[test]
fn analyses_stdin_as_text_report() {
    chandas()
        .write_stdin(SAMPLE_POEM)
        .assert()
        .success()
        .stdout(predicate::str::contains("LaghuGuru Analysis Report"))
        .stdout(predicate::str::contains("Line 1: ನದಿ ತೀರದಲಿ ಹಕ್ಕಿಯ ಕೂಗು\nPattern: L L G L L L G L L G L\n"))
        .stdout(predicate::str::contains("Line 2: ಮರದ ನಿಂತರಲಿ ಗಾಳಿ ಬೀಸು\nPattern: L L L G L L L G L G L\n"))
        .stdout(predicate::str::contains("Total Laghu (ಲ): 16"))
        .stdout(predicate::str::contains("Total Guru (ಗು): 6"))
        .stdout(predicate::str::contains("Total Words: 8"));
}

#[test]
fn file_input_as_json() {
    let ws = TempWorkspace::new("chandas_json");
    let poem = ws.file("poem.txt", SAMPLE_POEM);

    let output = chandas().args(["--format", "json"]).arg(&poem).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let doc = &json["documents"][0];
    assert_eq!(doc["prosody"]["totalLaghu"], 16);
    assert_eq!(doc["prosody"]["lines"][1]["lineNumber"], 2);
    assert_eq!(doc["statistics"]["totalSentences"], 1);
    assert_eq!(doc["statistics"]["nGramFrequencies"]["1"].as_array().unwrap().len(), 8);
}

#[test]
fn stats_mode_skips_prosody() {
    chandas()
        .args(["--mode", "stats"])
        .write_stdin("ಅ ಅ ಬ ಅ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text Statistics Report"))
        .stdout(predicate::str::contains("1. ಅ (3)"))
        .stdout(predicate::str::contains("LaghuGuru").not());
}

#[test]
fn markdown_and_yaml_formats() {
    chandas()
        .args(["-f", "md", "--mode", "prosody"])
        .write_stdin("ಕಾ ಮ")
        .assert()
        .success()
        .stdout(predicate::str::contains("## <stdin>"))
        .stdout(predicate::str::contains("| 1 | ಕಾ ಮ | G L |"));

    chandas()
        .args(["-f", "yaml", "--mode", "prosody"])
        .write_stdin("ಕಾ ಮ")
        .assert()
        .success()
        .stdout(predicate::str::contains("documents:"))
        .stdout(predicate::str::contains("totalGuru: 1"));
}

#[test]
fn output_flag_writes_file_and_keeps_stdout_empty() {
    let ws = TempWorkspace::new("chandas_out");
    let poem = ws.file("poem.txt", SAMPLE_POEM);
    let report = ws.path().join("report.txt");

    chandas().arg(&poem).arg("-o").arg(&report).assert().success().stdout(predicate::str::is_empty());

    assert!(ws.read("report.txt").starts_with("LaghuGuru Analysis Report\n"));
}

#[test]
fn wrap_reflows_long_lines() {
    chandas()
        .args(["--wrap", "5", "--mode", "prosody"])
        .write_stdin("ನದಿ ತೀರದಲಿ ಹಕ್ಕಿಯ ಕೂಗು")
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 2: ತೀರದಲಿ"))
        .stdout(predicate::str::contains("Total Laghu (ಲ): 8"));
}

#[test]
fn garbled_input_only_warns_by_default() {
    chandas()
        .write_stdin("hello world")
        .assert()
        .success()
        .stderr(predicate::str::contains("Kannada characters"));
}
