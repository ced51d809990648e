/// Statement and block parsing.
///
/// This chunk implements:
/// - Statement lists (program top level and braced blocks)
/// - Bodies of control statements, braced or single-statement
/// - Control flow: `if`, `while`, `do`/`while`, `for`, `loop`, `match`
/// - Simple statements: `return`, `break`, `continue`, `intrinsic`
///
/// ## Notes
/// - Statement lists skip bare terminators, so `Noop` only comes from recovery.
/// - Dispatch is on the leading token; anything that is not a statement start is reported and skipped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lists
    // ========================================================================

    /// Parse statements until end of input, or until `}` when `in_block`.
    ///
    /// The closing brace is left for the caller.
    fn statement_list(&mut self, in_block: bool) -> Vec<Statement> {
        let mut statements = Vec::new();
        loop {
            self.skip_terminators();
            if self.is_at_end() || (in_block && self.check_op(OperatorId::RBrace)) {
                break;
            }
            let start = self.pos;
            statements.push(self.statement());
            if self.pos == start {
                self.advance();
            }
        }
        statements
    }

    /// `{ statements }`
    fn block(&mut self) -> Block {
        self.expect_op(OperatorId::LBrace);
        let statements = self.statement_list(true);
        self.expect_op(OperatorId::RBrace);
        statements
    }

    /// Body of a control statement: a braced block, `;` for an empty body, or a single statement.
    ///
    /// A newline right after the header is an error: the body would be ambiguous.
    fn body(&mut self) -> Block {
        let token = self.peek();
        if token.kind.is_operator(OperatorId::LBrace) {
            return self.block();
        }
        if token.is_semicolon() {
            self.advance();
            return Vec::new();
        }
        if token.is_newline() {
            self.unexpected();
            return Vec::new();
        }
        vec![self.statement()]
    }

    /// `( expression )`
    fn parenthesized(&mut self) -> Expr {
        self.expect_op(OperatorId::LParen);
        let expr = self.expression();
        self.expect_op(OperatorId::RParen);
        expr
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Statement {
        match self.peek().kind {
            TokenKind::Keyword(id) => match id {
                KeywordId::Import => self.import_statement(),
                KeywordId::Class => Statement::Class(self.class_decl()),
                KeywordId::Let | KeywordId::Const => Statement::Variable(self.variable_decl()),
                KeywordId::Fn | KeywordId::Async | KeywordId::Unsafe | KeywordId::Inline => {
                    Statement::Function(self.function_decl())
                }
                KeywordId::Macro => Statement::Macro(self.macro_decl()),
                KeywordId::Export => self.export_statement(),
                KeywordId::Return => self.return_statement(),
                KeywordId::If => self.if_statement(),
                KeywordId::Do => self.do_while_statement(),
                KeywordId::While => self.while_statement(),
                KeywordId::For => self.for_statement(),
                KeywordId::Loop => {
                    self.advance();
                    Statement::Loop(self.body())
                }
                KeywordId::Match => Statement::Match(self.match_statement()),
                KeywordId::Intrinsic => {
                    self.advance();
                    Statement::Intrinsic(self.literal())
                }
                KeywordId::Break => {
                    self.advance();
                    Statement::Break
                }
                KeywordId::Continue => {
                    self.advance();
                    Statement::Continue
                }
                KeywordId::Await => Statement::Expression(self.expression()),
                _ => self.unexpected_statement(),
            },
            TokenKind::Operator(OperatorId::LBrace) => Statement::Scope(self.block()),
            TokenKind::Decorator => self.decorator_statement(),
            TokenKind::EndOfLine => {
                self.advance();
                Statement::Noop
            }
            TokenKind::Identifier | TokenKind::Literal | TokenKind::Operator(_) => {
                Statement::Expression(self.expression())
            }
            TokenKind::Eof => {
                self.unexpected();
                Statement::Noop
            }
        }
    }

    fn unexpected_statement(&mut self) -> Statement {
        self.unexpected();
        self.advance();
        Statement::Noop
    }

    /// `return [expression]`
    fn return_statement(&mut self) -> Statement {
        self.advance(); // return
        if self.peek().kind.is_terminator() || self.check_op(OperatorId::RBrace) {
            Statement::Return(None)
        } else {
            Statement::Return(Some(self.expression()))
        }
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// `if (condition) body [else body]`
    fn if_statement(&mut self) -> Statement {
        self.advance(); // if
        let condition = self.parenthesized();
        let body = self.body();
        let alternate = if self.match_keyword_across_terminators(KeywordId::Else) {
            Some(self.body())
        } else {
            None
        };
        Statement::If {
            condition,
            body,
            alternate,
        }
    }

    /// `while (condition) body`
    fn while_statement(&mut self) -> Statement {
        self.advance(); // while
        let condition = self.parenthesized();
        let body = self.body();
        Statement::While { condition, body }
    }

    /// `do body while (condition)`
    fn do_while_statement(&mut self) -> Statement {
        self.advance(); // do
        let body = self.body();
        if !self.match_keyword_across_terminators(KeywordId::While) {
            self.expect_keyword(KeywordId::While);
        }
        let condition = self.parenthesized();
        Statement::DoWhile { body, condition }
    }

    /// `for (init; condition; step) body`
    fn for_statement(&mut self) -> Statement {
        self.advance(); // for
        self.expect_op(OperatorId::LParen);

        let init = if self.peek().is_semicolon() {
            Statement::Noop
        } else {
            self.statement()
        };
        self.expect_semicolon();

        let condition = self.expression();
        self.expect_semicolon();

        let step = if self.check_op(OperatorId::RParen) {
            Statement::Noop
        } else {
            self.statement()
        };
        self.expect_op(OperatorId::RParen);

        let body = self.body();
        Statement::For(ForStmt {
            init: Box::new(init),
            condition,
            step: Box::new(step),
            body,
        })
    }

    /// `match (value) { pattern => body ... _ => body }`
    fn match_statement(&mut self) -> MatchStmt {
        self.advance(); // match
        let value = self.parenthesized();

        let mut branches = Vec::new();
        let mut default = None;
        self.expect_op(OperatorId::LBrace);
        loop {
            self.skip_terminators();
            if self.is_at_end() || self.check_op(OperatorId::RBrace) {
                break;
            }

            let start = self.pos;
            let token = self.peek();
            if token.kind == TokenKind::Identifier
                && token.text == "_"
                && self.peek_nth(1).kind.is_operator(OperatorId::FatArrow)
            {
                let span = token.span;
                self.advance(); // _
                self.advance(); // =>
                let body = self.body();
                if default.is_some() {
                    self.error(errors::duplicate_default_branch(span));
                }
                default = Some(body);
            } else {
                let pattern = self.assignment();
                self.expect_op(OperatorId::FatArrow);
                let body = self.body();
                branches.push(MatchBranch { pattern, body });
            }

            if self.pos == start {
                self.advance();
            }
        }
        self.expect_op(OperatorId::RBrace);

        MatchStmt {
            value,
            branches,
            default,
        }
    }
}
