//! String scanning for the Bramble lexer
//!
//! The lexer only finds where a string ends. Escapes are validated and decoded by [`unescape`], which is shared
//! with [`crate::lexer::decode_literal`] so both agree on what every escape means.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::{Diagnostic, errors};

// ============================================================================
// Escape sequence handling
// ============================================================================

/// A recoverable problem found while decoding an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeWarning {
    /// A quote character that does not delimit this string was escaped.
    UnnecessaryEscape,
    /// `\x` followed by fewer than two hex digits.
    BadHex,
    /// `\u` followed by fewer than four hex digits.
    BadUnicode,
    /// A backslash followed by a character with no escape meaning.
    UnknownEscape,
}

impl EscapeWarning {
    pub fn message(self) -> &'static str {
        match self {
            EscapeWarning::UnnecessaryEscape => "Unnecessary escape character.",
            EscapeWarning::BadHex => "Unknown hex character.",
            EscapeWarning::BadUnicode => "Unknown Unicode character.",
            EscapeWarning::UnknownEscape => "Unknown escape sequence.",
        }
    }
}

/// Decode the escapes in the body of a string delimited by `quote`.
///
/// `report` receives each recoverable problem with its span relative to `body`. Decoding is best-effort:
/// - Unknown escapes keep the escaped character.
/// - Short hex escapes use the digits that are present.
/// - Invalid scalar values become U+FFFD.
pub fn unescape(body: &str, quote: char, mut report: impl FnMut(EscapeWarning, Span)) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some((esc_pos, esc)) = chars.next() else {
            // A trailing backslash only happens in unterminated strings.
            out.push('\\');
            break;
        };
        let esc_end = esc_pos + esc.len_utf8();

        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            '\\' => out.push('\\'),
            '"' | '\'' | '`' => {
                if esc != quote {
                    report(EscapeWarning::UnnecessaryEscape, Span::new(start, esc_end));
                }
                out.push(esc);
            }
            'x' | 'u' => {
                let width = if esc == 'x' { 2 } else { 4 };
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < width {
                    match chars.peek().and_then(|&(_, d)| d.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if digits < width {
                    let end = chars.peek().map_or(body.len(), |&(i, _)| i);
                    let warning = if esc == 'x' {
                        EscapeWarning::BadHex
                    } else {
                        EscapeWarning::BadUnicode
                    };
                    report(warning, Span::new(start, end));
                }
                if digits > 0 {
                    out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            other => {
                report(EscapeWarning::UnknownEscape, Span::new(start, esc_end));
                out.push(other);
            }
        }
    }

    out
}

/// Return the text between the quotes of a raw string literal.
///
/// The closing quote is dropped only if it is really there and not itself escaped.
pub(super) fn string_body(text: &str, quote: char) -> &str {
    let inner = &text[quote.len_utf8()..];
    if let Some(body) = inner.strip_suffix(quote) {
        let trailing_backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
        if trailing_backslashes % 2 == 0 {
            return body;
        }
    }
    inner
}

// ============================================================================
// String scanning
// ============================================================================

impl<'a> Lexer<'a> {
    /// Scan a string whose opening `quote` has been consumed.
    ///
    /// Only backtick strings may contain raw newlines. The newline that ends an unterminated string is left for the
    /// terminator rule.
    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        loop {
            match self.peek() {
                None => {
                    self.diagnostics
                        .push(errors::unterminated_string(Span::new(start, self.current_pos)));
                    break;
                }
                Some('\n') if quote != '`' => {
                    self.diagnostics
                        .push(errors::unterminated_string(Span::new(start, self.current_pos)));
                    break;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some('\n') if quote != '`' => {}
                        Some(_) => {
                            self.advance();
                        }
                        None => {}
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let text = &self.source[start..self.current_pos];
        let body = string_body(text, quote);
        let body_start = start + quote.len_utf8();
        let mut warnings = Vec::new();
        unescape(body, quote, |warning, span| {
            warnings.push(Diagnostic::warning(
                warning.message(),
                Span::new(body_start + span.start, body_start + span.end),
            ));
        });
        self.diagnostics.extend(warnings);

        self.add_token(TokenKind::Literal, start);
    }
}
