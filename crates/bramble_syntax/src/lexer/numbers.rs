//! Number scanning for the Bramble lexer
//!
//! Handles decimal literals (with optional fraction and exponent) and `0x` / `0o` radix literals. The token keeps
//! its raw text; [`parse_number`] turns that text into a value on demand.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::errors;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0' && matches!(self.peek(), Some('x' | 'o')) {
            let radix = if self.advance() == Some('x') { 16 } else { 8 };
            let digits_start = self.current_pos;
            self.consume_digits(radix);
            if self.current_pos == digits_start {
                self.diagnostics
                    .push(errors::missing_radix_digits(Span::new(start, self.current_pos)));
            }
            self.add_token(TokenKind::Literal, start);
            return;
        }

        // Integer part
        self.consume_digits(10);

        // Fraction, only when a digit follows the dot (`1.x` is a member access)
        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits(10);
        }

        // Exponent, only when digits follow it
        if matches!(self.peek(), Some('e' | 'E')) {
            let has_digits = match self.peek_nth(1) {
                Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if has_digits {
                self.advance(); // e
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.consume_digits(10);
            }
        }

        self.add_token(TokenKind::Literal, start);
    }

    fn consume_digits(&mut self, radix: u32) {
        while let Some(c) = self.peek() {
            if c.is_digit(radix) {
                self.advance();
            } else {
                break;
            }
        }
    }
}

/// Parse the raw text of a numeric literal.
///
/// Radix literals are accumulated as floating point so oversized values degrade instead of failing.
pub(super) fn parse_number(text: &str) -> Option<f64> {
    let radix_digits = text
        .strip_prefix("0x")
        .map(|digits| (16, digits))
        .or_else(|| text.strip_prefix("0o").map(|digits| (8, digits)));

    match radix_digits {
        Some((radix, digits)) => {
            if digits.is_empty() {
                return Some(0.0);
            }
            digits.chars().try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
        }
        None => text.parse::<f64>().ok(),
    }
}
