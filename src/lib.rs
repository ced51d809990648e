#![forbid(unsafe_code)]
//! Bramble Compiler Front End
//!
//! This crate ties the Bramble front end together: the syntax crate turns source into an AST, and this crate
//! lowers function bodies to a linear IR and provides the `bramble` command-line driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Recoverable problems** are [`Diagnostic`]s, never panics or `Err`. Only lowering returns `Err`, for
//!   constructs it does not implement.

pub mod backend;
pub mod cli;

pub use bramble_syntax::diagnostics::{self, Diagnostic};
pub use bramble_syntax::{ast, lexer, parser};

pub use backend::ir::{LoweredFunction, LoweringConfig, LoweringError, lower_function, lower_program};
