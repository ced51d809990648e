//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use bramble_core::lang::keywords::KeywordId;
use bramble_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this token ends a statement (`;`, newline, or end of input).
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::EndOfLine | TokenKind::Eof)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Return `true` for an end-of-line token produced by a newline rather than `;`.
    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::EndOfLine && self.text == "\n"
    }

    /// Return `true` for an end-of-line token produced by `;`.
    pub fn is_semicolon(&self) -> bool {
        self.kind == TokenKind::EndOfLine && self.text == ";"
    }
}
