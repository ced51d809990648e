/// Type parsing methods.
///
/// This chunk implements parsing for type references (`Name`, `a.b.Name`, `Map<K, V>`) and generic parameter
/// lists on declarations.
///
/// ## Notes
/// - The lexer matches `>>` and `>>>` greedily, so nested generic lists can end in a single token. The first
///   list to see one closes itself and leaves the rest in `pending_closes` for the enclosing lists.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// `a.b.Name<T, U>`
    fn type_node(&mut self) -> TypeNode {
        let mut path = TypePath::Name(self.identifier());
        while self.match_op(OperatorId::Dot) {
            path = TypePath::Access {
                object: Box::new(path),
                member: self.identifier(),
            };
        }

        let generics = if self.match_op(OperatorId::Lt) {
            self.type_arguments()
        } else {
            Vec::new()
        };

        TypeNode { path, generics }
    }

    /// Parse `T, U>` after an opening `<`.
    fn type_arguments(&mut self) -> Vec<TypeNode> {
        let mut generics = Vec::new();
        loop {
            generics.push(self.type_node());
            if self.pending_closes > 0 || !self.match_op(OperatorId::Comma) {
                break;
            }
        }
        self.close_generics();
        generics
    }

    fn close_generics(&mut self) {
        if self.pending_closes > 0 {
            self.pending_closes -= 1;
            return;
        }

        match self.peek().operator_id() {
            Some(OperatorId::Shr) => {
                self.advance();
                self.pending_closes += 1;
            }
            Some(OperatorId::UShr) => {
                self.advance();
                self.pending_closes += 2;
            }
            _ => {
                self.expect_op(OperatorId::Gt);
            }
        }
    }

    /// `<T, U>` on a class, function or method; empty if there is no `<`.
    fn generic_params(&mut self) -> Vec<Name> {
        let mut generics = Vec::new();
        if !self.match_op(OperatorId::Lt) {
            return generics;
        }
        loop {
            generics.push(self.identifier());
            if !self.match_op(OperatorId::Comma) {
                break;
            }
        }
        self.expect_op(OperatorId::Gt);
        generics
    }

    /// Return `true` if the `<` at the cursor opens a generic argument list of a call, `f<T>(..)`.
    ///
    /// The lookahead accepts only type-shaped tokens, tracks `<`/`>` depth (`>>` and `>>>` close two and three
    /// levels), and requires `(` right after the list closes. Anything else means `<` is a comparison.
    fn is_generic_call(&self) -> bool {
        let mut depth: usize = 0;
        let mut index = self.pos;
        loop {
            let token = self.token_at(index);
            let closes = match token.kind {
                TokenKind::Operator(OperatorId::Lt) => {
                    depth += 1;
                    0
                }
                TokenKind::Operator(OperatorId::Gt) => 1,
                TokenKind::Operator(OperatorId::Shr) => 2,
                TokenKind::Operator(OperatorId::UShr) => 3,
                TokenKind::Operator(OperatorId::Comma | OperatorId::Dot) | TokenKind::Identifier => 0,
                _ => return false,
            };
            if closes > depth {
                return false;
            }
            depth -= closes;
            index += 1;
            if depth == 0 {
                return self.token_at(index).kind.is_operator(OperatorId::LParen);
            }
        }
    }
}
