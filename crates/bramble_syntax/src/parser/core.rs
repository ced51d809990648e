/// Parser state.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - The parser is single-pass. Every production returns a node, possibly built from placeholders, and
///   every loop that could stall forces progress by one token.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// Returned by `peek` once the cursor runs past the slice, so token streams without a trailing `Eof` work too
    eof: Token,
    /// Generic argument lists closed early by a `>>` or `>>>` token that an inner list consumed
    pending_closes: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `bramble_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(0, |token| token.span.end);
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            eof: Token::new(TokenKind::Eof, "", Span::new(end, end)),
            pending_closes: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// The returned diagnostics are in the order they were found.
    pub fn parse(mut self) -> Parsed {
        let statements = self.statement_list(false);
        Parsed {
            program: Program { statements },
            diagnostics: self.diagnostics,
        }
    }
}
