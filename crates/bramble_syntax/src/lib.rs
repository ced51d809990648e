//! Syntax front end for the Bramble language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and is shared by the lowering pass and the command-line driver.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names, check types, or lower to IR.
//! - Vocabulary identity (keywords/operators) comes from `bramble_core::lang` registries.
//! - No stage fails outright. Each one returns its output together with the diagnostics it collected.
//!
//! ## Examples
//! ```rust
//! use bramble_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("fn main() -> void { test(1) }\n");
//! let parsed = parser::parse(&lexed.tokens);
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
