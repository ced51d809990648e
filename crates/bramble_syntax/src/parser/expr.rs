/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder, lowest first:
/// comma → assignment → conditional → `||` → `&&` → `|` → `^` → `&` → equality → relational → shift →
/// additive → multiplicative → `**` → prefix → postfix → call chain → primary.
///
/// ## Notes
/// - Every binary level goes through [`Parser::binary_chain`], which parses its right operand at the same level.
///   All binary operators therefore associate to the right: `1 + 2 + 3` is `1 + (2 + 3)`.
/// - A failed primary yields [`Expr::Noop`] so callers always get a node back.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Full expression, commas included.
    fn expression(&mut self) -> Expr {
        self.binary_chain(Self::assignment, &[OperatorId::Comma])
    }

    /// Expression without top-level commas: arguments, initializers, defaults, patterns.
    fn assignment(&mut self) -> Expr {
        self.binary_chain(
            Self::conditional,
            &[
                OperatorId::Eq,
                OperatorId::PlusEq,
                OperatorId::MinusEq,
                OperatorId::StarStarEq,
                OperatorId::StarEq,
                OperatorId::SlashEq,
                OperatorId::PercentEq,
                OperatorId::ShlEq,
                OperatorId::ShrEq,
                OperatorId::UShrEq,
                OperatorId::AmpEq,
                OperatorId::CaretEq,
                OperatorId::PipeEq,
                OperatorId::AmpAmpEq,
                OperatorId::PipePipeEq,
            ],
        )
    }

    /// `condition ? value : alternate`
    fn conditional(&mut self) -> Expr {
        let condition = self.logical_or();
        if !self.match_op(OperatorId::Question) {
            return condition;
        }
        let value = self.conditional();
        self.expect_op(OperatorId::Colon);
        let alternate = self.conditional();
        Expr::Conditional {
            condition: Box::new(condition),
            value: Box::new(value),
            alternate: Box::new(alternate),
        }
    }

    fn logical_or(&mut self) -> Expr {
        self.binary_chain(Self::logical_and, &[OperatorId::PipePipe])
    }

    fn logical_and(&mut self) -> Expr {
        self.binary_chain(Self::bitwise_or, &[OperatorId::AmpAmp])
    }

    fn bitwise_or(&mut self) -> Expr {
        self.binary_chain(Self::bitwise_xor, &[OperatorId::Pipe])
    }

    fn bitwise_xor(&mut self) -> Expr {
        self.binary_chain(Self::bitwise_and, &[OperatorId::Caret])
    }

    fn bitwise_and(&mut self) -> Expr {
        self.binary_chain(Self::equality, &[OperatorId::Amp])
    }

    fn equality(&mut self) -> Expr {
        self.binary_chain(Self::relational, &[OperatorId::EqEq, OperatorId::NotEq])
    }

    fn relational(&mut self) -> Expr {
        self.binary_chain(
            Self::shift,
            &[OperatorId::Lt, OperatorId::LtEq, OperatorId::Gt, OperatorId::GtEq],
        )
    }

    fn shift(&mut self) -> Expr {
        self.binary_chain(Self::additive, &[OperatorId::Shl, OperatorId::Shr, OperatorId::UShr])
    }

    fn additive(&mut self) -> Expr {
        self.binary_chain(Self::multiplicative, &[OperatorId::Plus, OperatorId::Minus])
    }

    fn multiplicative(&mut self) -> Expr {
        self.binary_chain(
            Self::exponent,
            &[OperatorId::Star, OperatorId::Slash, OperatorId::Percent],
        )
    }

    fn exponent(&mut self) -> Expr {
        self.binary_chain(Self::prefix, &[OperatorId::StarStar])
    }

    /// `operand (op chain)?`, where `operand` comes from the next tighter level.
    fn binary_chain(&mut self, operand: fn(&mut Self) -> Expr, ops: &[OperatorId]) -> Expr {
        let left = operand(self);
        let Some(id) = self.peek().operator_id().filter(|id| ops.contains(id)) else {
            return left;
        };
        let span = self.advance().span;
        let right = self.binary_chain(operand, ops);
        Expr::Binary {
            left: Box::new(left),
            op: Spanned::new(id, span),
            right: Box::new(right),
        }
    }

    // ========================================================================
    // Unary operators
    // ========================================================================

    /// `await x`, `++x`, `--x`, `+x`, `-x`, `~x`, `!x`
    fn prefix(&mut self) -> Expr {
        let token = self.peek();
        let op = if token.kind.is_keyword(KeywordId::Await) {
            Some(PrefixOp::Await)
        } else {
            token.operator_id().and_then(PrefixOp::from_operator)
        };
        let Some(op) = op else {
            return self.postfix();
        };

        let span = self.advance().span;
        let operand = self.prefix();
        Expr::Prefix {
            op: Spanned::new(op, span),
            operand: Box::new(operand),
        }
    }

    /// `x++`, `x--`
    fn postfix(&mut self) -> Expr {
        let mut expr = self.call_chain();
        while let Some(op) = self.peek().operator_id().and_then(PostfixOp::from_operator) {
            let span = self.advance().span;
            expr = Expr::Postfix {
                operand: Box::new(expr),
                op: Spanned::new(op, span),
            };
        }
        expr
    }

    // ========================================================================
    // Calls and member access
    // ========================================================================

    /// `f(args)`, `f<T>(args)` and `.member`, chained left to right.
    ///
    /// The chain may continue on a later line only with a `.`.
    fn call_chain(&mut self) -> Expr {
        let mut expr = self.primary();
        loop {
            if self.check_op(OperatorId::LParen) {
                expr = Expr::Call(CallExpr {
                    callee: Box::new(expr),
                    generics: Vec::new(),
                    args: self.call_arguments(),
                });
            } else if self.check_op(OperatorId::Lt) && self.is_generic_call() {
                self.advance(); // <
                let generics = self.type_arguments();
                expr = Expr::Call(CallExpr {
                    callee: Box::new(expr),
                    generics,
                    args: self.call_arguments(),
                });
            } else if self.match_op(OperatorId::Dot) {
                expr = Expr::Member {
                    object: Box::new(expr),
                    property: self.identifier(),
                };
            } else if self.dot_after_newlines() {
                self.skip_newlines();
            } else {
                break;
            }
        }
        expr
    }

    /// `(a, b)`; each argument is an assignment-level expression.
    ///
    /// Newlines may follow `(` and `,` and precede `)`. The returned span runs from `(` to `)`.
    fn call_arguments(&mut self) -> Spanned<Vec<Expr>> {
        let start = self.peek().span.start;
        self.expect_op(OperatorId::LParen);
        self.skip_newlines();

        let mut args = Vec::new();
        if !self.check_op(OperatorId::RParen) {
            loop {
                args.push(self.assignment());
                self.skip_newlines();
                if !self.match_op(OperatorId::Comma) {
                    break;
                }
                self.skip_newlines();
            }
        }

        self.expect_op(OperatorId::RParen);
        let end = self.previous_span().end.max(start);
        Spanned::new(args, Span::new(start, end))
    }

    // ========================================================================
    // Primary
    // ========================================================================

    /// Identifier, literal or `( expression )`, with an optional trailing `as Type`.
    fn primary(&mut self) -> Expr {
        let token = self.peek();
        let expr = match token.kind {
            TokenKind::Identifier => {
                let name = name_of(token);
                self.advance();
                Expr::Variable(name)
            }
            TokenKind::Literal => {
                let name = name_of(token);
                self.advance();
                Expr::Literal(name)
            }
            TokenKind::Operator(OperatorId::LParen) => {
                self.advance();
                let inner = self.expression();
                self.expect_op(OperatorId::RParen);
                inner
            }
            TokenKind::Eof | TokenKind::EndOfLine => {
                let span = token.span;
                self.unexpected();
                return Expr::Noop(Spanned::new((), span));
            }
            _ => {
                let span = token.span;
                self.unexpected();
                self.advance();
                return Expr::Noop(Spanned::new((), span));
            }
        };

        if self.match_keyword(KeywordId::As) {
            Expr::Cast {
                expr: Box::new(expr),
                ty: self.type_node(),
            }
        } else {
            expr
        }
    }
}
