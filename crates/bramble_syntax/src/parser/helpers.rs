/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_nth`, `advance`)
/// - Matching / expecting keywords and operators
/// - Terminator handling (`skip_terminators`, `skip_newlines`, lookahead across newlines)
/// - Required-token recovery (`expect_where`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Return the token `n` positions ahead without consuming anything.
    fn peek_nth(&self, n: usize) -> &Token {
        self.token_at(self.pos + n)
    }

    fn token_at(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// Span of the most recently consumed token, or of the current token at the start of input.
    fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(index) => self.token_at(index).span,
            None => self.peek().span,
        }
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At the end of input this is a no-op that returns the `Eof` token.
    fn advance(&mut self) -> &Token {
        if self.is_at_end() {
            return self.peek();
        }
        self.pos += 1;
        self.token_at(self.pos - 1)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record an error for the current token without consuming it.
    ///
    /// End of line and end of file get their own messages.
    fn unexpected(&mut self) {
        let token = self.peek();
        let diagnostic = match token.kind {
            TokenKind::Eof => errors::unexpected_end_of_file(token.span),
            TokenKind::EndOfLine => errors::unexpected_end_of_line(token.span),
            _ => errors::unexpected_token(&token.text, token.span),
        };
        self.error(diagnostic);
    }

    // ========================================================================
    // Required tokens
    // ========================================================================

    /// Consume a required token.
    ///
    /// ## Recovery
    /// - A terminator is never consumed: the error is "Unexpected end of line." or "Unexpected end of file.".
    /// - Otherwise `message` is recorded once. If the token after the current one is acceptable, the current
    ///   token is skipped as extraneous and the next one consumed. If not, the required token is treated as
    ///   missing and nothing is consumed.
    ///
    /// Returns the consumed token as a [`Name`], or `None` if the token was missing.
    fn expect_where(&mut self, accept: impl Fn(&Token) -> bool, message: impl FnOnce() -> String) -> Option<Name> {
        if accept(self.peek()) {
            return Some(name_of(self.advance()));
        }

        if self.peek().kind.is_terminator() {
            self.unexpected();
            return None;
        }

        let span = self.peek().span;
        self.error(Diagnostic::error(message(), span));
        if accept(self.peek_nth(1)) {
            self.advance();
            return Some(name_of(self.advance()));
        }
        None
    }

    fn expect_op(&mut self, id: OperatorId) -> bool {
        self.expect_where(
            |token| token.kind.is_operator(id),
            || format!("Expect '{}'.", operators::as_str(id)),
        )
        .is_some()
    }

    fn expect_keyword(&mut self, id: KeywordId) -> bool {
        self.expect_where(
            |token| token.kind.is_keyword(id),
            || format!("Expect '{}'.", keywords::as_str(id)),
        )
        .is_some()
    }

    fn expect_semicolon(&mut self) -> bool {
        self.expect_where(Token::is_semicolon, || "Expect ';'.".to_string())
            .is_some()
    }

    // ========================================================================
    // Terminators
    // ========================================================================

    /// Skip `;` and newline tokens.
    fn skip_terminators(&mut self) {
        while self.peek().kind == TokenKind::EndOfLine {
            self.advance();
        }
    }

    /// Skip newline tokens only; `;` still ends the statement.
    fn skip_newlines(&mut self) {
        while self.peek().is_newline() {
            self.advance();
        }
    }

    /// Consume `id` if it is the first token after any run of terminators.
    ///
    /// Nothing is consumed when the keyword is not there.
    fn match_keyword_across_terminators(&mut self, id: KeywordId) -> bool {
        let mut index = self.pos;
        while self.token_at(index).kind == TokenKind::EndOfLine {
            index += 1;
        }
        if self.token_at(index).kind.is_keyword(id) {
            self.pos = index + 1;
            true
        } else {
            false
        }
    }

    /// Return `true` if the current newline run is followed by a `.` member access.
    fn dot_after_newlines(&self) -> bool {
        let mut index = self.pos;
        while self.token_at(index).is_newline() {
            index += 1;
        }
        index > self.pos && self.token_at(index).kind.is_operator(OperatorId::Dot)
    }
}
