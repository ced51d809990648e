//! Property-based tests for lowering
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use bramble::backend::ir::{Command, LoweringConfig, Place, Value, lower_program};
use bramble::{lexer, parser};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn binary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "%", "&", "|", "&&", "||", "<", ">", "=="])
}

/// Expressions built only from constructs lowering supports.
fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..100).prop_map(|n| n.to_string()),
        Just("test()".to_string()),
        "[a-z]{0,3}".prop_map(|s| format!("\"{}\"", s)),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("({} {} {})", l, op, r)),
            prop::collection::vec(inner, 0..4).prop_map(|args| format!("test({})", args.join(", "))),
        ]
    })
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(expr_strategy(), 1..4).prop_map(|calls| {
        let body: Vec<String> = calls.into_iter().map(|args| format!("  test({})", args)).collect();
        format!("fn main() -> void {{\n{}\n}}\n", body.join("\n"))
    })
}

// =============================================================================
// Slot Properties
// =============================================================================

fn local_index(value: &Value) -> Option<usize> {
    match value {
        Value::Local(slot) => Some(slot.index()),
        _ => None,
    }
}

/// Every local slot read or written by `command`.
fn locals_of(command: &Command) -> Vec<usize> {
    match command {
        Command::Assign { target, source } => {
            let mut slots: Vec<usize> = local_index(source).into_iter().collect();
            if let Place::Local(slot) = target {
                slots.push(slot.index());
            }
            slots
        }
        Command::Binary { lhs, rhs, .. } => [lhs, rhs].into_iter().filter_map(local_index).collect(),
        Command::Call { args, .. } => args.iter().filter_map(local_index).collect(),
        _ => Vec::new(),
    }
}

proptest! {
    /// Property: supported expressions always lower, and slot bookkeeping stays consistent
    #[test]
    fn supported_expressions_lower_with_consistent_slots(source in program_strategy()) {
        let parsed = parser::parse(&lexer::lex(&source).tokens);
        prop_assert!(parsed.diagnostics.is_empty(), "{:?} in {}", parsed.diagnostics, source);

        let results = lower_program(&parsed.program, &LoweringConfig::default());
        prop_assert_eq!(results.len(), 1);
        let function = match &results[0] {
            Ok(function) => function,
            Err(e) => return Err(TestCaseError::fail(format!("{} in {}", e, source))),
        };

        // Every statement is a call, so nothing is dead.
        prop_assert!(function.diagnostics.is_empty());
        let last_is_call = matches!(function.commands.last(), Some(Command::Call { .. }));
        prop_assert!(last_is_call);

        let spills = function
            .commands
            .iter()
            .filter(|command| matches!(command, Command::Assign { target: Place::Local(_), .. }))
            .count();
        prop_assert!(function.locals <= spills);

        for command in &function.commands {
            for index in locals_of(command) {
                prop_assert!(index < function.locals, "{} uses l${} in {}", command, index, function);
            }
        }
    }

    /// Property: a spilled slot is never overwritten before it is read back
    #[test]
    fn spilled_slots_are_read_before_reuse(source in program_strategy()) {
        let parsed = parser::parse(&lexer::lex(&source).tokens);
        let results = lower_program(&parsed.program, &LoweringConfig::default());
        let Some(Ok(function)) = results.first() else {
            return Err(TestCaseError::fail(format!("lowering failed for {}", source)));
        };

        let mut pending: Vec<bool> = vec![false; function.locals];
        for command in &function.commands {
            if let Command::Assign { target: Place::Local(slot), .. } = command {
                prop_assert!(!pending[slot.index()], "l${} overwritten while live in {}", slot.index(), function);
                pending[slot.index()] = true;
                continue;
            }
            for index in locals_of(command) {
                pending[index] = false;
            }
        }
    }
}
