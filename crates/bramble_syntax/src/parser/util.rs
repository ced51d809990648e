/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types” (identifier and literal terminals).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume an identifier.
    ///
    /// A missing identifier becomes an empty name with a zero-width span at the current token.
    fn identifier(&mut self) -> Name {
        self.expect_where(
            |token| token.kind == TokenKind::Identifier,
            || "Expect an identifier.".to_string(),
        )
        .unwrap_or_else(|| self.missing_name())
    }

    /// Consume a literal token, keeping its raw text.
    fn literal(&mut self) -> Name {
        self.expect_where(
            |token| token.kind == TokenKind::Literal,
            || "Expect a literal.".to_string(),
        )
        .unwrap_or_else(|| self.missing_name())
    }

    /// `from` is not reserved; it is matched by its text.
    fn expect_from(&mut self) {
        self.expect_where(
            |token| token.kind == TokenKind::Identifier && token.text == "from",
            || "Expect 'from'.".to_string(),
        );
    }

    fn missing_name(&self) -> Name {
        let start = self.peek().span.start;
        Spanned::new(String::new(), Span::new(start, start))
    }
}

fn name_of(token: &Token) -> Name {
    Spanned::new(token.text.clone(), token.span)
}
