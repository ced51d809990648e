/// Output of a parsing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `bramble_syntax::lexer`.
///
/// ## Returns
/// The program is always complete. Grammar violations are listed in `diagnostics` and leave `Noop`
/// placeholders behind in the tree.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Parsed {
    Parser::new(tokens).parse()
}
