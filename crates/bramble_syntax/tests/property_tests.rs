//! Property-based tests for the Bramble front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use bramble_syntax::lexer::{self, TokenKind};
use bramble_syntax::parser::{self, Parsed};
use proptest::prelude::*;

// =============================================================================
// Lexer Properties
// =============================================================================

/// Check the token stream invariants every lexing pass must uphold.
fn check_token_stream(source: &str) -> Result<(), TestCaseError> {
    let lexed = lexer::lex(source);

    let last = lexed.tokens.last();
    prop_assert!(matches!(last.map(|t| t.kind), Some(TokenKind::Eof)));

    let mut previous_start = 0;
    for token in &lexed.tokens {
        prop_assert!(token.span.start <= token.span.end, "{:?}", token);
        prop_assert!(token.span.end <= source.len(), "{:?}", token);
        prop_assert!(token.span.start >= previous_start, "{:?}", token);
        prop_assert!(source.is_char_boundary(token.span.start));
        previous_start = token.span.start;
    }

    for diagnostic in &lexed.diagnostics {
        prop_assert!(diagnostic.span.end <= source.len(), "{:?}", diagnostic);
    }
    Ok(())
}

proptest! {
    /// Property: lexing terminates on arbitrary text and spans stay in bounds
    #[test]
    fn lexing_arbitrary_text(source in any::<String>()) {
        check_token_stream(&source)?;
    }

    /// Property: same, biased towards characters the lexer treats specially
    #[test]
    fn lexing_source_like_text(source in "[a-z0-9_$ +*/=<>!&|^%~?:,.(){}\\[\\];@#\n\"'`\\\\-]{0,80}") {
        check_token_stream(&source)?;
    }
}

// =============================================================================
// Round-trip Properties
// =============================================================================

fn parse_source(source: &str) -> Parsed {
    parser::parse(&lexer::lex(source).tokens)
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-e]".prop_map(String::from)
}

fn binary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "**", "==", "!=", "<", "<=", ">", ">=", "<<", ">>", ">>>", "&", "|", "^", "&&",
        "||", "=", "+=", "-=",
    ])
}

fn prefix_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["-", "+", "!", "~", "await "])
}

fn expr_strategy() -> impl Strategy<Value = String> + Clone {
    let leaf = prop_oneof![
        name_strategy(),
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-z ]{0,5}".prop_map(|s| format!("\"{}\"", s)),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
            (prefix_op_strategy(), inner.clone()).prop_map(|(op, e)| format!("{}{}", op, e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            inner.clone().prop_map(|e| format!("({})++", e)),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, v, a)| format!("{} ? {} : {}", c, v, a)),
            (name_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{}({})", f, args.join(", "))),
            (inner.clone(), name_strategy()).prop_map(|(e, m)| format!("({}).{}", e, m)),
            inner.prop_map(|e| format!("(({}) as T)", e)),
        ]
    })
}

fn statement_strategy() -> impl Strategy<Value = String> {
    let expr = expr_strategy();
    prop_oneof![
        expr.clone(),
        (name_strategy(), expr.clone()).prop_map(|(n, e)| format!("let {} = {}", n, e)),
        (expr.clone(), expr.clone(), expr.clone())
            .prop_map(|(c, b, e)| format!("if ({}) {{ {} }} else {}", c, b, e)),
        (expr.clone(), expr.clone()).prop_map(|(c, b)| format!("while ({}) {{\n{}\n}}", c, b)),
        expr.prop_map(|e| format!("return {}", e)),
    ]
}

fn program_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(statement_strategy(), 0..5), any::<bool>()).prop_map(|(statements, wrap)| {
        let body = statements.join("\n");
        if wrap {
            format!("fn main() -> void {{\n{}\n}}\n", body)
        } else {
            body
        }
    })
}

proptest! {
    /// Property: printing a diagnostic-free program and parsing the output gives an equal tree
    #[test]
    fn printed_programs_reparse_to_equal_trees(source in program_strategy()) {
        let first = parse_source(&source);
        prop_assert!(first.diagnostics.is_empty(), "{:?} in {}", first.diagnostics, source);

        let printed = first.program.to_string();
        let second = parse_source(&printed);
        prop_assert!(second.diagnostics.is_empty(), "{:?} in {}", second.diagnostics, printed);
        prop_assert_eq!(first.program, second.program);
    }

    /// Property: the parser terminates and returns a program for arbitrary token soup
    #[test]
    fn parsing_arbitrary_text_terminates(source in "[a-z0-9 +*/=<>!&|?:,.(){};@\n-]{0,60}|(fn|let|if|else|match|for|class|export|import|return) [a-z(){};=>\n]{0,20}") {
        let parsed = parse_source(&source);
        // Re-printing must not panic either.
        let _ = parsed.program.to_string();
    }
}
