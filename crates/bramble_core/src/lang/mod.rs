//! Bramble language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords and operators.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables,
//! which keeps stringly-typed checks out of the lexer and parser.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - Each registry table is ordered exactly like its id enum, so `info_for` is a direct index.
//!
//! ## Examples
//! ```rust
//! use bramble_core::lang::keywords::{self, KeywordId};
//! use bramble_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
//! assert_eq!(operators::as_str(OperatorId::UShrEq), ">>>=");
//! ```

pub mod keywords;
pub mod operators;
