//! Token types for the Bramble lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for every symbol, including braces and arrows
//!
//! Every token also keeps its raw source text. Literals are never decoded by the lexer; call
//! [`crate::lexer::decode_literal`] when the value is needed.

use crate::ast::Span;
use bramble_core::lang::keywords::{self, KeywordId};
use bramble_core::lang::operators::OperatorId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword(KeywordId),
    /// Number or quoted string, with its delimiters and escapes intact.
    Literal,
    /// The `@` that starts a decorator.
    Decorator,
    Operator(OperatorId),
    /// `;` or a newline. Both terminate a statement.
    EndOfLine,
    /// End of input sentinel; always the last token.
    Eof,
}

/// A token with its kind, raw text and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Number(f64),
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
