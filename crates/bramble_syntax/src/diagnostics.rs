//! Diagnostics shared by every front-end stage.
//!
//! A [`Diagnostic`] is a report, never a control-flow signal: the lexer, the parser and the lowering pass keep
//! producing output after recording one. Offsets are byte positions into the source that was lexed; turning them
//! into line/column excerpts is left to the caller (the CLI renders them through `miette`).

use std::fmt;

use thiserror::Error;

use crate::ast::Span;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message attached to a half-open source range `[span.start, span.end)`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity,
            span,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    pub fn info(message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Info, message, span)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Info => miette::Severity::Advice,
            Severity::Warning => miette::Severity::Warning,
            Severity::Error => miette::Severity::Error,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(miette::LabeledSpan::underline(self.span))))
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::from((span.start, span.end.saturating_sub(span.start)))
    }
}

/// Return `true` if any diagnostic in `diagnostics` is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Standard diagnostics raised by more than one place in the front end.
pub mod errors {
    use super::*;

    pub fn unknown_character(c: char, span: Span) -> Diagnostic {
        Diagnostic::error(format!("Unknown character '{}'.", c), span)
    }

    pub fn unterminated_comment(span: Span) -> Diagnostic {
        Diagnostic::error("Unterminated multi-line comment.", span).with_hint("Close the comment with `*/`")
    }

    pub fn unterminated_string(span: Span) -> Diagnostic {
        Diagnostic::error("Unterminated string literal.", span)
            .with_hint("Use a backtick string if the literal has to span several lines")
    }

    pub fn missing_radix_digits(span: Span) -> Diagnostic {
        Diagnostic::warning("Missing digits after radix prefix.", span)
    }

    pub fn unexpected_token(text: &str, span: Span) -> Diagnostic {
        Diagnostic::error(format!("Unexpected token '{}'.", text.escape_debug()), span)
    }

    pub fn unexpected_end_of_line(span: Span) -> Diagnostic {
        Diagnostic::error("Unexpected end of line.", span)
    }

    pub fn unexpected_end_of_file(span: Span) -> Diagnostic {
        Diagnostic::error("Unexpected end of file.", span)
    }

    pub fn duplicate_default_branch(span: Span) -> Diagnostic {
        Diagnostic::error("Already defined default branch.", span)
    }

    pub fn reimported(name: &str, span: Span) -> Diagnostic {
        Diagnostic::error(format!("'{}' reimported.", name), span)
    }

    pub fn redefined(name: &str, span: Span) -> Diagnostic {
        Diagnostic::error(format!("'{}' redefined.", name), span)
    }

    pub fn repeated_qualifier(qualifier: &str, owner: &str, span: Span) -> Diagnostic {
        Diagnostic::error(format!("Already used '{}' for this {}.", qualifier, owner), span)
    }

    pub fn no_effect(span: Span) -> Diagnostic {
        Diagnostic::warning("Expression has no effect.", span).with_hint("Remove the statement or use its value")
    }
}
