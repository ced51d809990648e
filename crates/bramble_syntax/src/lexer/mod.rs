//! Lexer for the Bramble programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers (`[A-Za-z_$][A-Za-z0-9_$]*`)
//! - Number and string literals, kept as raw text
//! - Operators, matched greedily against the operator registry
//! - Statement terminators (`;` and newlines)
//!
//! The lexer never stops early. Problems are recorded as diagnostics and scanning continues to the end of input.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, LiteralValue)
//! - `strings` - String scanning and escape decoding
//! - `numbers` - Numeric literal scanning and decoding

mod numbers;
mod strings;
pub mod tokens;

pub use strings::{EscapeWarning, unescape};
pub use tokens::{LiteralValue, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::{Diagnostic, errors};
use bramble_core::lang::operators;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Every newline and every ';' becomes an EndOfLine token. Continuations inside
// argument and parameter lists are the parser's business.
// ============================================================================

/// Output of a lexing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Token stream; always ends with a [`TokenKind::Eof`] token.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexer for Bramble source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The cursor only moves forward, so this always terminates. The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Lexed {
        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end)));

        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Look `n` characters past the next one (`peek_nth(0)` is `peek`).
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.current_pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, text, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Comments
            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => {
                self.advance();
                self.skip_block_comment();
            }

            // Terminators
            '\n' | ';' => self.add_token(TokenKind::EndOfLine, start),

            // Whitespace other than newlines
            _ if c.is_whitespace() => {}

            _ if is_ident_start(c) => self.scan_identifier(start),

            // Literals
            '0'..='9' => self.scan_number(start, c),
            '"' | '\'' | '`' => self.scan_string(start, c),

            '@' => self.add_token(TokenKind::Decorator, start),

            _ if operators::is_operator_start(c) => self.scan_operator(start),

            _ => {
                self.diagnostics
                    .push(errors::unknown_character(c, Span::new(start, self.current_pos)));
            }
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Skip to the end of the line, leaving the newline for the terminator rule.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment whose opening has been consumed.
    fn skip_block_comment(&mut self) {
        loop {
            match self.advance() {
                Some('*') if self.match_char('/') => return,
                Some(_) => {}
                None => {
                    let end = self.source.len();
                    self.diagnostics.push(errors::unterminated_comment(Span::new(end, end)));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Extend the operator starting at `start` while the longer spelling is still registered.
    fn scan_operator(&mut self, start: usize) {
        while let Some(next) = self.peek() {
            let candidate = &self.source[start..self.current_pos + next.len_utf8()];
            if operators::from_str(candidate).is_none() {
                break;
            }
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        match operators::from_str(spelling) {
            Some(id) => self.add_token(TokenKind::Operator(id), start),
            None => {
                // Only reachable if a registered spelling has an unregistered first character.
                let c = spelling.chars().next().unwrap_or_default();
                self.diagnostics
                    .push(errors::unknown_character(c, Span::new(start, self.current_pos)));
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Identifier, start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    Lexer::new(source).tokenize()
}

/// Decode the raw text of a literal token.
///
/// ## Returns
/// - `Some(LiteralValue::Str)` for quoted text, with escapes resolved.
/// - `Some(LiteralValue::Number)` for numeric text in any supported radix.
/// - `None` if `text` is not literal text.
///
/// ## Examples
/// ```rust
/// use bramble_syntax::lexer::{LiteralValue, decode_literal};
///
/// assert_eq!(decode_literal(r#""a\n\x41""#), Some(LiteralValue::Str("a\nA".to_string())));
/// assert_eq!(decode_literal("0x1f"), Some(LiteralValue::Number(31.0)));
/// ```
pub fn decode_literal(text: &str) -> Option<LiteralValue> {
    let first = text.chars().next()?;
    match first {
        '"' | '\'' | '`' => {
            let body = strings::string_body(text, first);
            Some(LiteralValue::Str(unescape(body, first, |_, _| {})))
        }
        '0'..='9' => numbers::parse_number(text).map(LiteralValue::Number),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
