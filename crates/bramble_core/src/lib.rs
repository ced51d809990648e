//! Provide the canonical language vocabulary for the Bramble compiler front end.
//!
//! This crate is intentionally small and dependency-free. The lexer, the parser and the AST printer all look up
//! spellings here instead of repeating string literals at each call site.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST types.
//! - Current scope: reserved keywords and the fixed operator set.

pub mod lang;
