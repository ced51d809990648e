//! Error types for AST to IR lowering.
//!
//! Lowering is deliberately partial. Reaching a construct it has no rule for aborts the current function with a
//! [`LoweringError`]; it is never downgraded to a diagnostic, so callers can tell "lowered with warnings" apart
//! from "could not be lowered".

use bramble_syntax::ast::Span;
use miette::Diagnostic;
use thiserror::Error;

/// Fatal failure while lowering one function.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LoweringError {
    #[error("not implemented: {construct}")]
    #[diagnostic(code(bramble::lower::not_implemented))]
    NotImplemented {
        construct: String,
        #[label("cannot be lowered yet")]
        span: Span,
    },
}

impl LoweringError {
    pub fn not_implemented(construct: impl Into<String>, span: Span) -> Self {
        LoweringError::NotImplemented {
            construct: construct.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LoweringError::NotImplemented { span, .. } => *span,
        }
    }
}
