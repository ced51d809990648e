//! Integration tests for the Bramble pipeline, driven through the CLI stages

use std::fs;
use std::path::Path;

use bramble::backend::ir::LoweringConfig;
use bramble::cli::ExitCode;
use bramble::cli::commands::{lower_source, read_source};

/// Run the full pipeline on a source file, collecting every failure message.
fn compile_file(path: &Path) -> Result<Vec<String>, Vec<String>> {
    let file_name = path.to_string_lossy();
    let source = read_source(&file_name).map_err(|e| vec![e.message])?;

    let results = lower_source(&file_name, &source, &LoweringConfig::default()).map_err(|e| vec![e.message])?;

    let mut lowered = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(function) => lowered.push(function.to_string()),
            Err(e) => failures.push(e.to_string()),
        }
    }
    if failures.is_empty() { Ok(lowered) } else { Err(failures) }
}

fn fixtures(dir: &str) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "br").unwrap_or(false))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {}", dir);
    paths
}

/// Test that all valid fixtures lower successfully
#[test]
fn test_valid_fixtures() {
    for path in fixtures("tests/fixtures/valid") {
        let result = compile_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to lower successfully, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("tests/fixtures/invalid") {
        let result = compile_file(&path);
        assert!(result.is_err(), "Expected {} to fail, but it lowered", path.display());
    }
}

#[test]
fn test_pipeline_fixture_output() {
    let lowered = compile_file(Path::new("tests/fixtures/valid/pipeline.br")).unwrap();
    assert_eq!(
        lowered,
        [
            "fn run(0) {\n    mul 2, 3\n    add 1, res\n    call test, (res)\n}",
            "fn idle(0) {\n}",
        ]
    );
}

#[test]
fn test_front_end_errors_carry_source_excerpts() {
    let source = read_source("tests/fixtures/invalid/unterminated.br").unwrap();
    let err = lower_source("unterminated.br", &source, &LoweringConfig::default()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("Unterminated string literal."), "{}", err.message);
    assert!(err.message.contains("unterminated.br"), "{}", err.message);
}

#[test]
fn test_missing_file_is_reported() {
    let err = read_source("tests/fixtures/none.br").unwrap_err();
    assert!(err.message.starts_with("Cannot access file"), "{}", err.message);
}
