//! Parser for the Bramble programming language
//!
//! Converts a token stream into an AST. Parsing never fails outright: grammar violations are recorded as
//! diagnostics and the parser keeps going, leaving `Noop` placeholders where nothing sensible could be built.
//!
//! ## Examples
//!
//! ```rust
//! use bramble_syntax::{lexer, parser};
//!
//! let source = "fn add(a: int, b: int) -> int {\n    return a + b\n}\n";
//! let lexed = lexer::lex(source);
//! let parsed = parser::parse(&lexed.tokens);
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.program.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::{Token, TokenKind};
use bramble_core::lang::keywords::{self, KeywordId};
use bramble_core::lang::operators::{self, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
