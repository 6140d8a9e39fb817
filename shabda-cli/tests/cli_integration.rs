//! Integration tests for the shabda CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn shabda() -> Command {
    Command::cargo_bin("shabda").unwrap()
}

#[test]
fn test_help_command() {
    shabda()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_script_command() {
    shabda()
        .args(["script", "gacchati", "गच्छति", "gam गम्"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gacchati\tlatin"))
        .stdout(predicate::str::contains("गच्छति\tdevanagari"))
        .stdout(predicate::str::contains("gam गम्\tmixed"));
}

#[test]
fn test_tokenize_text() {
    shabda()
        .args(["tokenize", "kaurava"])
        .assert()
        .success()
        .stdout("kaurava\tlatin\tk au r a v a\n");
}

#[test]
fn test_tokenize_file_json() {
    shabda()
        .args(["tokenize", "-i", &fixture_path("forms.txt"), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"bh\""))
        .stdout(predicate::str::contains("\"ai\""))
        .stdout(predicate::str::contains("\"devanagari\""));
}

#[test]
fn test_tokenize_stdin() {
    shabda()
        .args(["tokenize", "-i", "-"])
        .write_stdin("tha\n")
        .assert()
        .success()
        .stdout("tha\tlatin\tth a\n");
}

#[test]
fn test_tokenize_without_input_fails() {
    shabda()
        .arg("tokenize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input"));
}

#[test]
fn test_missing_file() {
    shabda()
        .args(["tokenize", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_classify_rules_mode() {
    shabda()
        .args(["classify", "gam", "ya", "--mode", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gam + ya\tblocked"))
        .stdout(predicate::str::contains("scored"));

    shabda()
        .args(["classify", "sad", "kta", "-m", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sad + kta\tlicensed"));
}

#[test]
fn test_classify_lookup_json() {
    let output = shabda()
        .args(["classify", "gam", "kta", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["root"], "gam");
    assert_eq!(value["outcome"], true);
    assert_eq!(value["path"], "inclusion");
}

#[test]
fn test_classify_batch_with_metrics() {
    shabda()
        .args(["classify", "--batch", &fixture_path("pairs.txt"), "--metrics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("śam + kta\tlicensed"))
        .stdout(predicate::str::contains("exclusion"))
        .stdout(predicate::str::contains("calls: 4"));
}

#[test]
fn test_classify_config_file_and_overrides() {
    shabda()
        .args(["classify", "gam", "ya", "-c", &fixture_path("strict.toml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("gam + ya\tlicensed"));

    shabda()
        .args(["classify", "gam", "ya", "-c", &fixture_path("strict.toml"), "-t", "3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gam + ya\tblocked"));

    shabda()
        .args(["classify", "gam", "ya", "-w", "bogus=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown evidence signal"));
}

#[test]
fn test_analyze_complete() {
    shabda()
        .args(["analyze", "gam", "--affix", "ya", "--operation", "guna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("surface: gaya"))
        .stdout(predicate::str::contains("phonology.script"))
        .stdout(predicate::str::contains("morphology.operation"))
        .stdout(predicate::str::contains("blocking.outcome = true"));
}

#[test]
fn test_analyze_phonological_json() {
    let output = shabda()
        .args(["analyze", "bhavati", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["history"].as_array().unwrap().len(), 3);
    assert_eq!(value["facts"]["phonology.has_aspirate"], true);
}

#[test]
fn test_analyze_morphological_requires_affix() {
    shabda()
        .args(["analyze", "gam", "--preset", "morphological"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--affix is required"));
}

#[test]
fn test_config_generate_and_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classifier.toml");
    let path_str = path.to_str().unwrap();

    shabda()
        .args(["config", "generate", "-o", path_str])
        .assert()
        .success();
    assert!(path.exists());

    shabda()
        .args(["config", "generate", "-o", path_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    shabda()
        .args(["config", "validate", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("Threshold: 3.5"));
}

#[test]
fn test_config_show() {
    shabda()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 3.5"))
        .stdout(predicate::str::contains("[evidence_weights]"));
}
