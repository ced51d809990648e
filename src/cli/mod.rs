//! CLI module for the Bramble compiler front end
//!
//! This module provides the `bramble` command-line interface.
//!
//! ## Usage
//!
//! - `bramble <file>` - Lower every function and print the IR
//! - `bramble --lower <file>` - Same, spelled out
//! - `bramble --parse <file>` - Print the parsed program back as source
//! - `bramble --lex <file>` - Dump the token stream
//!
//! `--intrinsic <NAME>` changes the one call target lowering recognizes (default `test`).
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

use crate::backend::ir::LoweringConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Front end succeeded but at least one function could not be lowered.
    pub const LOWERING_FAILED: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Bramble compiler front end
#[derive(Parser, Debug)]
#[command(name = "bramble")]
#[command(version = VERSION)]
#[command(about = "The Bramble compiler front end", long_about = None)]
pub struct Cli {
    /// File to lower (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Lower every function and print the IR
    #[arg(long = "lower", value_name = "FILE", conflicts_with = "file")]
    pub lower_file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "lower_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the program back as source (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "lower_file", "lex_file"])]
    pub parse_file: Option<PathBuf>,

    /// Call target recognized by lowering
    #[arg(long, value_name = "NAME", default_value = "test")]
    pub intrinsic: String,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    let config = LoweringConfig {
        intrinsic: cli.intrinsic,
    };
    match cli.lower_file.or(cli.file) {
        Some(file) => commands::lower_file(&file.to_string_lossy(), &config),
        None => Err(CliError::failure(
            "No input file. Run `bramble --help` for usage.",
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["bramble", "main.br"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.br")));
        assert_eq!(cli.intrinsic, "test");
    }

    #[test]
    fn test_cli_parse_intrinsic() {
        let cli = Cli::try_parse_from(["bramble", "--intrinsic", "print", "main.br"]).unwrap();
        assert_eq!(cli.intrinsic, "print");
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["bramble", "--lex", "main.br"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["bramble", "--parse", "main.br"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["bramble", "--lower", "main.br"]).unwrap();
        assert!(cli.lower_file.is_some());
    }

    #[test]
    fn test_cli_rejects_two_modes() {
        assert!(Cli::try_parse_from(["bramble", "--lex", "a.br", "--parse", "b.br"]).is_err());
        assert!(Cli::try_parse_from(["bramble", "--lex", "a.br", "b.br"]).is_err());
    }

    #[test]
    fn test_execute_without_file_fails() {
        let cli = Cli::try_parse_from(["bramble"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_execute_missing_file_fails() {
        let cli = Cli::try_parse_from(["bramble", "does/not/exist.br"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert!(err.message.contains("Cannot access file"), "{}", err.message);
    }
}
