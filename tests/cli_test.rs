//! Integration tests for the CLI command layer.

use clap::Parser;
use sagitta::cli::args::SagittaArgs;
use sagitta::cli::commands::execute_command;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "A good day for a walk. The weather was great.").unwrap();
    path
}

#[test]
fn test_export_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("report.txt");

    let args = SagittaArgs::try_parse_from([
        "sagitta",
        "-q",
        "export",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();
    execute_command(&args).unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("TEXT ANALYSIS REPORT"));
    assert!(report.contains("PART-OF-SPEECH DISTRIBUTION:"));
}

#[test]
fn test_commands_run_on_fixture() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let input = input.to_str().unwrap();

    for command in [
        vec!["sagitta", "-q", "report", input],
        vec!["sagitta", "-q", "frequency", input, "-n", "5"],
        vec!["sagitta", "-q", "frequency", input, "--lemmas"],
        vec!["sagitta", "-q", "sentiment", input],
        vec!["sagitta", "-q", "sentiment", input, "--rank", "lowest"],
        vec!["sagitta", "-q", "stats", input],
        vec!["sagitta", "-q", "pos", input],
        vec!["sagitta", "-q", "readability", input],
        vec!["sagitta", "-q", "phrases", input],
        vec!["sagitta", "-q", "kwic", input, "day"],
        vec!["sagitta", "-q", "--format", "json", "stats", input],
        vec!["sagitta", "-q", "--format", "json", "--pretty", "pos", input],
    ] {
        let args = SagittaArgs::try_parse_from(command.clone()).unwrap();
        execute_command(&args).unwrap_or_else(|e| panic!("{command:?} failed: {e}"));
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let args =
        SagittaArgs::try_parse_from(["sagitta", "-q", "stats", "/nonexistent/input.txt"]).unwrap();
    assert!(execute_command(&args).is_err());
}

#[test]
fn test_blank_kwic_keyword_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let args = SagittaArgs::try_parse_from([
        "sagitta",
        "-q",
        "kwic",
        input.to_str().unwrap(),
        "   ",
    ])
    .unwrap();
    assert!(execute_command(&args).is_err());
}

#[test]
fn test_zero_limit_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let args = SagittaArgs::try_parse_from([
        "sagitta",
        "-q",
        "frequency",
        input.to_str().unwrap(),
        "-n",
        "0",
    ])
    .unwrap();
    assert!(execute_command(&args).is_err());
}
