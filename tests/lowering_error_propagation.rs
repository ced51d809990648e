//! Lowering must stop a function at the first construct it cannot lower, and report side-effect-free
//! statements as warnings instead.

use bramble::ast::{Program, Span, Statement};
use bramble::backend::ir::{LoweringConfig, LoweringError, lower_function, lower_program};
use bramble::diagnostics::Severity;
use bramble::{lexer, parser};

fn parse(source: &str) -> Program {
    let parsed = parser::parse(&lexer::lex(source).tokens);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    parsed.program
}

fn lower_main(source: &str) -> Result<bramble::LoweredFunction, LoweringError> {
    let program = parse(source);
    match program.statements.first() {
        Some(Statement::Function(function)) => lower_function(function, &LoweringConfig::default()),
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn dead_expression_is_a_warning_without_commands() {
    let function = lower_main("fn main() -> void { 1+2; }").unwrap();
    assert!(function.commands.is_empty());
    assert_eq!(function.locals, 0);
    assert_eq!(function.diagnostics.len(), 1);

    let warning = &function.diagnostics[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.message, "Expression has no effect.");
    assert_eq!(warning.span, Span::new(20, 23));
}

#[test]
fn bare_literal_is_a_warning() {
    let function = lower_main("fn main() -> void {\n  \"unused\"\n  test()\n}").unwrap();
    assert_eq!(function.diagnostics.len(), 1);
    assert_eq!(function.commands.len(), 1);
}

#[test]
fn non_expression_statement_is_not_implemented() {
    let err = lower_main("fn main() -> void {\n  test()\n  if (1) test()\n}").unwrap_err();
    assert_eq!(
        err,
        LoweringError::not_implemented("if statement", Span::new(35, 36))
    );
}

#[test]
fn statement_without_span_falls_back_to_the_function_name() {
    let err = lower_main("fn main() -> void { break }").unwrap_err();
    assert_eq!(err, LoweringError::not_implemented("break statement", Span::new(3, 7)));
}

#[test]
fn unknown_callee_is_not_implemented() {
    let err = lower_main("fn main() -> void { print(1) }").unwrap_err();
    assert!(matches!(err, LoweringError::NotImplemented { ref construct, .. } if construct == "call to 'print'"));
}

#[test]
fn configured_intrinsic_replaces_the_default() {
    let program = parse("fn main() -> void { print(test()) }");
    let Some(Statement::Function(function)) = program.statements.first() else {
        panic!("expected a function");
    };
    let config = LoweringConfig {
        intrinsic: "print".to_string(),
    };
    // `test` is now the unknown callee.
    let err = lower_function(function, &config).unwrap_err();
    assert!(err.to_string().contains("call to 'test'"), "{}", err);
}

#[test]
fn failure_reports_nothing_partial() {
    // The first statement lowers; the second aborts the whole function.
    let err = lower_main("fn main() -> void {\n  test(1)\n  test(x)\n}").unwrap_err();
    assert_eq!(err.span(), Span::new(37, 38));
}

#[test]
fn program_lowering_reaches_exported_and_decorated_functions() {
    let program = parse(
        "export fn a() -> void { test(1) }\n\
         @trace\n\
         fn b() -> void { test(2) }\n\
         @trace\n\
         export fn c() -> void { test(y) }\n\
         class K { m() -> void { test() } }\n\
         let d = 1\n",
    );
    let results = lower_program(&program, &LoweringConfig::default());
    assert_eq!(results.len(), 3);

    let names: Vec<_> = results
        .iter()
        .filter_map(|result| result.as_ref().ok())
        .map(|function| function.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
    assert!(results[2].is_err());
}
