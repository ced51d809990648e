/// Declaration parsing methods.
///
/// This chunk implements parsing for top-level constructs like:
/// - `import` (member lists and default imports)
/// - `class` with methods
/// - `fn` with qualifiers
/// - `let` / `const`
/// - `macro`
/// - `export` and `@decorator` chains
///
/// ## Notes
/// - Declarations double as statements, so they can also appear inside bodies.
/// - Duplicate names (imports, bindings) are reported and the duplicate is dropped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Exports and decorators
    // ========================================================================

    /// Parse a declaration that can be exported or decorated.
    ///
    /// Returns the declaration together with whether an `export` appeared anywhere in it; `None` (nothing
    /// consumed) if the current token cannot start one.
    fn declaration(&mut self, allow_export: bool) -> Option<(Declaration, bool)> {
        let decl = match self.peek().kind {
            TokenKind::Keyword(KeywordId::Let | KeywordId::Const) => Declaration::Variable(self.variable_decl()),
            TokenKind::Keyword(KeywordId::Fn | KeywordId::Async | KeywordId::Unsafe | KeywordId::Inline) => {
                Declaration::Function(self.function_decl())
            }
            TokenKind::Keyword(KeywordId::Class) => Declaration::Class(self.class_decl()),
            TokenKind::Keyword(KeywordId::Macro) => Declaration::Macro(self.macro_decl()),
            TokenKind::Keyword(KeywordId::Export) if allow_export => {
                self.advance();
                let (decl, _) = self.declaration_or_error(false)?;
                return Some((decl, true));
            }
            TokenKind::Decorator => {
                let (decorator, exported) = self.decorator(allow_export)?;
                return Some((Declaration::Decorator(decorator), exported));
            }
            _ => return None,
        };
        Some((decl, false))
    }

    /// Like [`Self::declaration`], reporting the current token when nothing could start.
    ///
    /// A failure deeper in an `export` or decorator chain has already been reported.
    fn declaration_or_error(&mut self, allow_export: bool) -> Option<(Declaration, bool)> {
        let start = self.pos;
        let decl = self.declaration(allow_export);
        if decl.is_none() && self.pos == start {
            self.unexpected();
        }
        decl
    }

    /// `export <declaration>`
    ///
    /// A second `export` anywhere below this one is reported, so the inner flag is always unset.
    fn export_statement(&mut self) -> Statement {
        self.advance(); // export
        match self.declaration_or_error(false) {
            Some((decl, _)) => Statement::Export(decl),
            None => Statement::Noop,
        }
    }

    /// `@a.b(args) <declaration>`
    ///
    /// The returned flag is set if the decorated chain contained an `export`; the caller hoists it to the
    /// outermost position. `allow_export` is unset once an enclosing `export` has been seen.
    fn decorator(&mut self, allow_export: bool) -> Option<(Decorator, bool)> {
        self.advance(); // @

        let mut callee = vec![self.identifier()];
        while self.match_op(OperatorId::Dot) {
            callee.push(self.identifier());
        }

        let args = if self.check_op(OperatorId::LParen) {
            self.call_arguments().node
        } else {
            Vec::new()
        };

        self.skip_newlines();
        let (target, exported) = self.declaration_or_error(allow_export)?;
        Some((
            Decorator {
                callee,
                args,
                target: Box::new(target),
            },
            exported,
        ))
    }

    fn decorator_statement(&mut self) -> Statement {
        match self.decorator(true) {
            Some((decorator, true)) => Statement::Export(Declaration::Decorator(decorator)),
            Some((decorator, false)) => Statement::Decorator(decorator),
            None => Statement::Noop,
        }
    }

    // ========================================================================
    // Imports
    // ========================================================================

    /// `import { a, b: c } from "src"` or `import a from "src"`
    fn import_statement(&mut self) -> Statement {
        self.advance(); // import

        if !self.match_op(OperatorId::LBrace) {
            let name = self.identifier();
            self.expect_from();
            let source = self.literal();
            return Statement::ImportDefault(ImportDefault { name, source });
        }

        let mut members: Vec<ImportMember> = Vec::new();
        loop {
            self.skip_terminators();
            if self.check_op(OperatorId::RBrace) {
                break;
            }

            let name = self.identifier();
            let alias = if self.match_op(OperatorId::Colon) {
                Some(self.identifier())
            } else {
                None
            };
            let member = ImportMember { name, alias };

            let local = member.local_name();
            if members.iter().any(|m| m.local_name().node == local.node) {
                let diagnostic = errors::reimported(&local.node, local.span);
                self.error(diagnostic);
            } else {
                members.push(member);
            }

            self.skip_terminators();
            if !self.match_op(OperatorId::Comma) {
                break;
            }
        }
        self.expect_op(OperatorId::RBrace);

        self.expect_from();
        let source = self.literal();
        Statement::Import(ImportDecl { members, source })
    }

    // ========================================================================
    // Functions and methods
    // ========================================================================

    /// Parse a run of qualifier keywords drawn from `allowed`, in any order.
    ///
    /// A repeated qualifier is reported against `owner` ("function" or "method") and otherwise ignored.
    fn qualifiers(&mut self, allowed: &[KeywordId], owner: &str) -> Qualifiers {
        let mut qualifiers = Qualifiers::default();
        while let Some(id) = self.peek().keyword_id().filter(|id| allowed.contains(id)) {
            let span = self.peek().span;
            let slot = match id {
                KeywordId::Unsafe => &mut qualifiers.is_unsafe,
                KeywordId::Static => &mut qualifiers.is_static,
                KeywordId::Pub => &mut qualifiers.is_pub,
                KeywordId::Inline => &mut qualifiers.is_inline,
                _ => break,
            };
            if *slot {
                self.diagnostics
                    .push(errors::repeated_qualifier(keywords::as_str(id), owner, span));
            }
            *slot = true;
            self.advance();
        }
        if self.match_keyword(KeywordId::Async) {
            qualifiers.is_async = true;
        }
        qualifiers
    }

    /// `[unsafe|inline]* [async] fn name<T>(params) -> Type { body }`
    fn function_decl(&mut self) -> FunctionDecl {
        let qualifiers = self.qualifiers(&[KeywordId::Unsafe, KeywordId::Inline], "function");
        self.expect_keyword(KeywordId::Fn);
        let name = self.identifier();
        let (generics, params, return_type, body) = self.signature_and_body();
        FunctionDecl {
            qualifiers,
            name,
            generics,
            params,
            return_type,
            body,
        }
    }

    /// `[unsafe|static|pub|inline]* [async] name<T>(params) -> Type { body }`
    fn method_decl(&mut self) -> MethodDecl {
        let qualifiers = self.qualifiers(
            &[KeywordId::Unsafe, KeywordId::Static, KeywordId::Pub, KeywordId::Inline],
            "method",
        );
        let name = self.identifier();
        let (generics, params, return_type, body) = self.signature_and_body();
        MethodDecl {
            qualifiers,
            name,
            generics,
            params,
            return_type,
            body,
        }
    }

    fn signature_and_body(&mut self) -> (Vec<Name>, Vec<Parameter>, TypeNode, Block) {
        let generics = self.generic_params();
        let params = self.parameter_list();
        self.expect_op(OperatorId::Arrow);
        let return_type = self.type_node();
        let body = self.block();
        (generics, params, return_type, body)
    }

    /// `(name: Type = default, ...)`, with the same newline allowance as call arguments.
    fn parameter_list(&mut self) -> Vec<Parameter> {
        let mut params = Vec::new();
        self.expect_op(OperatorId::LParen);
        self.skip_newlines();
        if !self.check_op(OperatorId::RParen) {
            loop {
                params.push(self.parameter());
                self.skip_newlines();
                if !self.match_op(OperatorId::Comma) {
                    break;
                }
                self.skip_newlines();
            }
        }
        self.expect_op(OperatorId::RParen);
        params
    }

    fn parameter(&mut self) -> Parameter {
        let name = self.identifier();
        let ty = if self.match_op(OperatorId::Colon) {
            Some(self.type_node())
        } else {
            None
        };
        let default = if self.match_op(OperatorId::Eq) {
            Some(self.assignment())
        } else {
            None
        };
        Parameter { name, ty, default }
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// `class Name<T> extends Base { methods }`
    fn class_decl(&mut self) -> ClassDecl {
        self.advance(); // class
        let name = self.identifier();
        let generics = self.generic_params();
        let extends = if self.match_keyword(KeywordId::Extends) {
            Some(self.type_node())
        } else {
            None
        };

        let mut methods = Vec::new();
        self.expect_op(OperatorId::LBrace);
        loop {
            self.skip_terminators();
            if self.is_at_end() || self.check_op(OperatorId::RBrace) {
                break;
            }
            if !self.at_method_start() {
                self.unexpected();
                self.advance();
                continue;
            }
            let start = self.pos;
            methods.push(self.method_decl());
            if self.pos == start {
                self.advance();
            }
        }
        self.expect_op(OperatorId::RBrace);

        ClassDecl {
            name,
            generics,
            extends,
            methods,
        }
    }

    fn at_method_start(&self) -> bool {
        match self.peek().kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::Unsafe | KeywordId::Static | KeywordId::Pub | KeywordId::Inline | KeywordId::Async
            ),
            _ => false,
        }
    }

    // ========================================================================
    // Variables and macros
    // ========================================================================

    /// `let|const a: T = value, b = value`
    fn variable_decl(&mut self) -> VariableDecl {
        let kind = if self.match_keyword(KeywordId::Const) {
            BindingKind::Const
        } else {
            self.advance(); // let
            BindingKind::Let
        };

        let mut bindings: Vec<Binding> = Vec::new();
        loop {
            let name = self.identifier();
            let ty = if self.match_op(OperatorId::Colon) {
                Some(self.type_node())
            } else {
                None
            };
            self.expect_op(OperatorId::Eq);
            let value = self.assignment();

            if bindings.iter().any(|b| b.name.node == name.node) {
                self.error(errors::redefined(&name.node, name.span));
            } else {
                bindings.push(Binding { name, ty, value });
            }

            if !self.match_op(OperatorId::Comma) {
                break;
            }
        }

        VariableDecl { kind, bindings }
    }

    /// `macro name = "code"`
    fn macro_decl(&mut self) -> MacroDecl {
        self.advance(); // macro
        let name = self.identifier();
        self.expect_op(OperatorId::Eq);
        let code = self.literal();
        MacroDecl { name, code }
    }
}
