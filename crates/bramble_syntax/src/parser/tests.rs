#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, on the printer's output for them, and on the
/// parser's error recovery behavior (one diagnostic per problem, no cascades).
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Parsed {
        let lexed = lexer::lex(source);
        assert!(lexed.diagnostics.is_empty(), "lexer reported {:?}", lexed.diagnostics);
        parse(&lexed.tokens)
    }

    fn parse_ok(source: &str) -> Program {
        let parsed = parse_str(source);
        assert!(parsed.diagnostics.is_empty(), "parser reported {:?}", parsed.diagnostics);
        parsed.program
    }

    fn print(source: &str) -> String {
        parse_ok(source).to_string()
    }

    fn messages(parsed: &Parsed) -> Vec<&str> {
        parsed.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    fn single_expression(source: &str) -> Expr {
        let program = parse_ok(source);
        assert_eq!(program.statements.len(), 1);
        match program.statements.into_iter().next() {
            Some(Statement::Expression(expr)) => expr,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    // ========================================================================
    // Precedence and associativity
    // ========================================================================

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(print("1+2*3"), "(1)+((2)*(3));");
    }

    #[test]
    fn test_binary_chains_associate_right() {
        assert_eq!(print("1+2+3"), "(1)+((2)+(3));");
        assert_eq!(print("a = b = c"), "(a)=((b)=(c));");
        assert_eq!(print("8 / 4 / 2"), "(8)/((4)/(2));");
    }

    #[test]
    fn test_conditional_nests_in_alternate() {
        assert_eq!(print("a ? b : c ? d : e"), "(a)?(b):((c)?(d):(e));");
    }

    #[test]
    fn test_conditional_value_is_a_conditional() {
        assert_eq!(print("a ? b ? c : d : e"), "(a)?((b)?(c):(d)):(e);");

        let parsed = parse_str("a ? b = c : d");
        assert_eq!(messages(&parsed).first(), Some(&"Expect ':'."));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(print("-a ** !b"), "(-(a))**(!(b));");
        assert_eq!(print("x++"), "(x)++;");
        assert_eq!(print("await f()"), "await (f());");
    }

    #[test]
    fn test_comma_is_lowest() {
        let expr = single_expression("a = 1, b = 2");
        match expr {
            Expr::Binary { op, .. } => assert_eq!(op.node, OperatorId::Comma),
            other => panic!("Expected comma expression, got {:?}", other),
        }
    }

    #[test]
    fn test_cast_applies_to_primary() {
        assert_eq!(print("x as int + 1"), "((x) as int)+(1);");
    }

    // ========================================================================
    // Calls and member access
    // ========================================================================

    #[test]
    fn test_generic_call() {
        let expr = single_expression("f<A<B>>(x) + 1");
        let Expr::Binary { left, .. } = expr else {
            panic!("Expected binary expression");
        };
        match *left {
            Expr::Call(call) => {
                assert_eq!(call.generics.len(), 1);
                assert_eq!(call.generics[0].generics.len(), 1);
                assert_eq!(call.args.node.len(), 1);
            }
            other => panic!("Expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_less_than_is_not_a_generic_call() {
        assert_eq!(print("a < b"), "(a)<(b);");
        assert_eq!(print("a < (b) > c"), "(a)<((b)>(c));");
    }

    #[test]
    fn test_member_chain_continues_on_next_line() {
        assert_eq!(print("x.y.z(1)\n  .w"), "x.y.z(1).w;");
    }

    #[test]
    fn test_call_span_covers_arguments() {
        let expr = single_expression("foo(1, 2)");
        assert_eq!(expr.span(), Span::new(0, 9));
    }

    // ========================================================================
    // Statements and declarations
    // ========================================================================

    #[test]
    fn test_print_declarations() {
        assert_eq!(
            print("let a: Map<K, V> = 1, b = f<T>(x, (y, z))"),
            "let a:Map<K,V> =1,b=f<T>(x,((y),(z)));"
        );
        assert_eq!(
            print("unsafe inline async fn f<T>(a, b: T) -> void {}"),
            "unsafe inline async fn f<T>(a,b:T)->void{};"
        );
        insta::assert_snapshot!(
            print("class Box<T> extends base.Box<T> {\n  pub static make<U>(v: U = 0) -> Box<U> { return v }\n}"),
            @"class Box<T> extends base.Box<T>{static pub make<U>(v:U =0)->Box<U>{return v;}};"
        );
        insta::assert_snapshot!(print("macro m = \"code\"\nintrinsic `raw`"), @r#"macro m="code";intrinsic `raw`;"#);
    }

    #[test]
    fn test_print_imports() {
        insta::assert_snapshot!(print("import {a, b: c} from \"m\""), @r#"import {a,b:c} from "m";"#);
        insta::assert_snapshot!(print("import d from 'm'"), @"import d from 'm';");
    }

    #[test]
    fn test_print_control_flow() {
        assert_eq!(print("if (a) b() else { c = 1 }"), "if(a){b();}else{(c)=(1);};");
        assert_eq!(print("do x++ while (x < 3)"), "do{(x)++;}while((x)<(3));");
        assert_eq!(
            print("for (let i = 0; i < n; i += 1) {}"),
            "for(let i=0;(i)<(n);(i)+=(1)){};"
        );
        assert_eq!(print("for (; ok; ) loop { break }"), "for(;ok;){loop{break;};};");
        assert_eq!(print("match (x) { 1 => a\n _ => {} }"), "match(x){1 =>{a;}_ =>{}};");
        assert_eq!(print("while (x) { continue }"), "while(x){continue;};");
    }

    #[test]
    fn test_else_after_semicolon_and_newlines() {
        let program = parse_ok("if (a) x; else y\nif (b) {}\n\nelse {}");
        assert_eq!(program.statements.len(), 2);
        for statement in &program.statements {
            assert!(matches!(statement, Statement::If { alternate: Some(_), .. }));
        }
    }

    #[test]
    fn test_do_while_across_newlines() {
        let program = parse_ok("do {\n}\nwhile (x)");
        assert!(matches!(program.statements[..], [Statement::DoWhile { .. }]));
    }

    #[test]
    fn test_semicolon_body_is_empty() {
        let program = parse_ok("while (x);");
        match &program.statements[..] {
            [Statement::While { body, .. }] => assert!(body.is_empty()),
            other => panic!("Expected while, got {:?}", other),
        }
    }

    #[test]
    fn test_return_without_value() {
        let program = parse_ok("fn f() -> void { return }\nreturn\nreturn 1");
        assert!(matches!(program.statements[1], Statement::Return(None)));
        assert!(matches!(program.statements[2], Statement::Return(Some(_))));
    }

    #[test]
    fn test_terminators_do_not_create_statements() {
        let program = parse_ok(";;\n\na;;b\n");
        assert_eq!(program.statements.len(), 2);
    }

    // ========================================================================
    // Decorators and exports
    // ========================================================================

    #[test]
    fn test_export_is_hoisted_out_of_decorators() {
        let program = parse_ok("@log.info(\"x\")\nexport fn main() -> void { return }");
        match &program.statements[..] {
            [Statement::Export(Declaration::Decorator(decorator))] => {
                let callee: Vec<&str> = decorator.callee.iter().map(|n| n.node.as_str()).collect();
                assert_eq!(callee, vec!["log", "info"]);
                assert_eq!(decorator.args.len(), 1);
                assert!(matches!(*decorator.target, Declaration::Function(_)));
            }
            other => panic!("Expected exported decorator, got {:?}", other),
        }
        assert_eq!(
            program.to_string(),
            "export @log.info(\"x\") fn main()->void{return;};"
        );
    }

    #[test]
    fn test_nested_decorators() {
        let program = parse_ok("@a\n@b(1, 2)\nclass C {}");
        match &program.statements[..] {
            [Statement::Decorator(outer)] => match &*outer.target {
                Declaration::Decorator(inner) => {
                    assert_eq!(inner.args.len(), 2);
                    assert!(matches!(*inner.target, Declaration::Class(_)));
                }
                other => panic!("Expected inner decorator, got {:?}", other),
            },
            other => panic!("Expected decorator, got {:?}", other),
        }
    }

    #[test]
    fn test_export_of_decorator() {
        let program = parse_ok("export @a let x = 1");
        assert!(matches!(
            program.statements[..],
            [Statement::Export(Declaration::Decorator(_))]
        ));
    }

    #[test]
    fn test_export_inside_exported_decorator_is_rejected() {
        for source in [
            "export @a export fn f() -> void {}",
            "@a export @b export fn f() -> void {}",
            "export export fn f() -> void {}",
        ] {
            let parsed = parse_str(source);
            assert_eq!(messages(&parsed), vec!["Unexpected token 'export'."], "{}", source);
            assert!(
                matches!(
                    parsed.program.statements[..],
                    [Statement::Noop, Statement::Export(Declaration::Function(_))]
                ),
                "{}: {:?}",
                source,
                parsed.program.statements
            );
        }
    }

    #[test]
    fn test_export_requires_declaration() {
        let parsed = parse_str("export 1");
        assert_eq!(messages(&parsed), vec!["Unexpected token '1'."]);
        assert!(matches!(
            parsed.program.statements[..],
            [Statement::Noop, Statement::Expression(_)]
        ));
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    #[test]
    fn test_missing_function_name_is_single_error() {
        let parsed = parse_str("fn ()->void{}");
        assert_eq!(messages(&parsed), vec!["Expect an identifier."]);
        match &parsed.program.statements[..] {
            [Statement::Function(function)] => {
                assert_eq!(function.name.node, "");
                assert_eq!(function.name.span, Span::new(3, 3));
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_extraneous_token_is_skipped() {
        let parsed = parse_str("fn f] () -> void {}");
        assert_eq!(messages(&parsed), vec!["Expect '('."]);
        assert!(matches!(parsed.program.statements[..], [Statement::Function(_)]));
    }

    #[test]
    fn test_unexpected_statement_start() {
        let parsed = parse_str("else\nx");
        assert_eq!(messages(&parsed), vec!["Unexpected token 'else'."]);
        assert!(matches!(
            parsed.program.statements[..],
            [Statement::Noop, Statement::Expression(Expr::Variable(_))]
        ));
    }

    #[test]
    fn test_missing_expression_at_end_of_file() {
        let parsed = parse_str("let a =");
        assert_eq!(messages(&parsed), vec!["Unexpected end of file."]);
        match &parsed.program.statements[..] {
            [Statement::Variable(decl)] => assert!(matches!(decl.bindings[0].value, Expr::Noop(_))),
            other => panic!("Expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_paren_does_not_hide_later_newlines() {
        let parsed = parse_str("let a = (1\nlet b = 2\nif (x)\n  y()\n");
        assert_eq!(
            messages(&parsed),
            vec!["Unexpected end of line.", "Unexpected end of line."]
        );
        assert!(matches!(
            parsed.program.statements[..],
            [
                Statement::Variable(_),
                Statement::Variable(_),
                Statement::If { .. },
                Statement::Expression(_)
            ]
        ));
    }

    #[test]
    fn test_missing_expression_leaves_newline_as_terminator() {
        // The failed primary does not consume the newline, so the next line is its own statement.
        let parsed = parse_str("let a =\nb");
        assert_eq!(messages(&parsed), vec!["Unexpected end of line."]);
        match &parsed.program.statements[..] {
            [Statement::Variable(decl), Statement::Expression(Expr::Variable(name))] => {
                assert!(matches!(decl.bindings[0].value, Expr::Noop(_)));
                assert_eq!(name.node, "b");
            }
            other => panic!("Expected declaration then expression, got {:?}", other),
        }
    }

    #[test]
    fn test_argument_and_parameter_lists_span_lines() {
        assert_eq!(
            print("fn f(\n  a,\n  b\n) -> void {\n  g(\n    a,\n    b\n  )\n}"),
            "fn f(a,b)->void{g(a,b);};"
        );
    }

    #[test]
    fn test_unbraced_body_on_next_line() {
        let parsed = parse_str("while (x)\n  y");
        assert_eq!(messages(&parsed), vec!["Unexpected end of line."]);
        assert_eq!(parsed.program.statements.len(), 2);
    }

    #[test]
    fn test_duplicate_default_branch() {
        let parsed = parse_str("match (x) {\n  1 => a\n  _ => b\n  _ => c\n}");
        assert_eq!(messages(&parsed), vec!["Already defined default branch."]);
        match &parsed.program.statements[..] {
            [Statement::Match(stmt)] => {
                assert_eq!(stmt.branches.len(), 1);
                let default = stmt.default.as_ref().map(|body| body[0].to_string());
                assert_eq!(default.as_deref(), Some("c"));
            }
            other => panic!("Expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_reimported_member_is_dropped() {
        let parsed = parse_str("import {a, b: a} from \"m\"");
        assert_eq!(messages(&parsed), vec!["'a' reimported."]);
        match &parsed.program.statements[..] {
            [Statement::Import(import)] => assert_eq!(import.members.len(), 1),
            other => panic!("Expected import, got {:?}", other),
        }
    }

    #[test]
    fn test_redefined_binding_is_dropped() {
        let parsed = parse_str("let a = 1, a = 2");
        assert_eq!(messages(&parsed), vec!["'a' redefined."]);
        match &parsed.program.statements[..] {
            [Statement::Variable(decl)] => assert_eq!(decl.bindings.len(), 1),
            other => panic!("Expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_qualifiers() {
        let parsed = parse_str("inline inline fn f() -> void {}");
        assert_eq!(messages(&parsed), vec!["Already used 'inline' for this function."]);

        let parsed = parse_str("class A {\n  static static m() -> void {}\n}");
        assert_eq!(messages(&parsed), vec!["Already used 'static' for this method."]);
    }

    #[test]
    fn test_unclosed_block_reports_end_of_file() {
        let parsed = parse_str("fn f() -> void {\n  a\n");
        assert_eq!(messages(&parsed), vec!["Unexpected end of file."]);
    }

    #[test]
    fn test_parser_without_eof_token() {
        let tokens = vec![Token::new(TokenKind::Identifier, "a", Span::new(0, 1))];
        let parsed = parse(&tokens);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.program.statements.len(), 1);
    }

    #[test]
    fn test_round_trip_sample() {
        let source = r#"
import {a, b: c} from "m"
@route.get("/x")
export async fn handler<T>(req: Request<T>, retries = 3) -> Response {
    let body = req.body.read(), n: int = 0
    for (let i = 0; i < retries; i++) {
        if (try_send<T>(body, i)) break
        else n += 1
    }
    match (n) {
        0 => return ok()
        _ => { log(n ? "retried" : "none") }
    }
}
"#;
        let first = parse_ok(source);
        let printed = first.to_string();
        let second = parse_ok(&printed);
        assert_eq!(first, second, "printed form: {}", printed);
    }
}
