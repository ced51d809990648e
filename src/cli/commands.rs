//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Each `*_file` command is a thin printing wrapper around a `*_source` function that works on an in-memory
//! source, so the pipeline can be driven without touching the file system.

use std::fs;

use bramble_syntax::ast::Program;
use bramble_syntax::diagnostics::{Diagnostic, has_errors};
use bramble_syntax::lexer::{self, Token};
use bramble_syntax::parser;
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

use super::{CliError, CliResult, ExitCode};
use crate::backend::ir::{LoweredFunction, LoweringConfig, LoweringError, lower_program};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting anything larger than [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Diagnostic rendering
// ============================================================================

/// Render one report with a labelled excerpt of `source`.
pub fn render_report<D>(file_name: &str, source: &str, diagnostic: D) -> String
where
    D: miette::Diagnostic + Send + Sync + 'static,
{
    let report = Report::new(diagnostic).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to the bare message
        out = format!("{}\n", report);
    }
    out
}

fn render_diagnostics(file_name: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&render_report(file_name, source, diagnostic.clone()));
    }
    out
}

/// Print warnings to stderr and turn errors into a failure.
fn check_stage(file_name: &str, source: &str, diagnostics: &[Diagnostic]) -> CliResult<()> {
    if has_errors(diagnostics) {
        return Err(CliError::failure(
            render_diagnostics(file_name, source, diagnostics).trim_end(),
        ));
    }
    if !diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(file_name, source, diagnostics));
    }
    Ok(())
}

// ============================================================================
// Pipeline stages
// ============================================================================

/// Lex `source`, failing if the lexer reported an error.
pub fn lex_source(file_name: &str, source: &str) -> CliResult<Vec<Token>> {
    let lexed = lexer::lex(source);
    check_stage(file_name, source, &lexed.diagnostics)?;
    Ok(lexed.tokens)
}

/// Lex and parse `source`, failing if either stage reported an error.
pub fn parse_source(file_name: &str, source: &str) -> CliResult<Program> {
    let tokens = lex_source(file_name, source)?;
    let parsed = parser::parse(&tokens);
    check_stage(file_name, source, &parsed.diagnostics)?;
    Ok(parsed.program)
}

/// Run the whole pipeline on `source`.
///
/// Front-end errors fail the call. Lowering failures do not: every function gets its own result.
pub fn lower_source(
    file_name: &str,
    source: &str,
    config: &LoweringConfig,
) -> CliResult<Vec<Result<LoweredFunction, LoweringError>>> {
    let program = parse_source(file_name, source)?;
    Ok(lower_program(&program, config))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in lex_source(file_path, &source)? {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the program back as source.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parse_source(file_path, &source)?;
    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}

/// Lower every function and print its IR.
///
/// Functions that lower are printed even when others fail. The failures are reported together afterwards.
pub fn lower_file(file_path: &str, config: &LoweringConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut failures = String::new();
    for result in lower_source(file_path, &source, config)? {
        match result {
            Ok(function) => {
                if !function.diagnostics.is_empty() {
                    eprint!("{}", render_diagnostics(file_path, &source, &function.diagnostics));
                }
                println!("{}", function);
            }
            Err(error) => failures.push_str(&render_report(file_path, &source, error)),
        }
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new(failures.trim_end(), ExitCode::LOWERING_FAILED))
    }
}
