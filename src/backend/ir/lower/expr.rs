//! Expression evaluation.
//!
//! [`FunctionLowering::evaluate`] classifies every expression as either a pure operand or a command list that
//! leaves its result in `res`. Combining two command lists needs care: the second list overwrites `res`, so the
//! first result is parked in a temporary slot, requested *before* the second list is lowered so that the second
//! list's own temporaries cannot collide with it.

use bramble_core::lang::operators::{self, OperatorId};
use bramble_syntax::ast::{CallExpr, Expr, Name, Spanned};
use bramble_syntax::lexer::decode_literal;

use super::FunctionLowering;
use super::errors::LoweringError;
use crate::backend::ir::command::{BinaryKind, Command};
use crate::backend::ir::value::{LocalSlot, Place, Value};

/// Result of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Evaluated {
    /// Usable directly as an operand. No commands.
    Pure(Value),
    /// Commands whose last effect leaves the value in `res`.
    Lowered(Vec<Command>),
}

/// Whether [`FunctionLowering::evaluate`] yields [`Evaluated::Pure`] for `expr` when it succeeds.
///
/// Decides spilling before the expression on the right is lowered.
fn yields_pure(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(_))
}

impl FunctionLowering<'_> {
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Evaluated, LoweringError> {
        match expr {
            Expr::Literal(literal) => self.literal(literal).map(Evaluated::Pure),
            Expr::Binary { left, op, right } => self.binary(left, op, right),
            Expr::Call(call) => self.call(call),
            Expr::Variable(name) => Err(LoweringError::not_implemented(
                format!("reference to '{}'", name.node),
                name.span,
            )),
            Expr::Conditional { .. } => Err(not_implemented("conditional expression", expr)),
            Expr::Cast { .. } => Err(not_implemented("cast", expr)),
            Expr::Prefix { op, .. } => Err(not_implemented(format!("prefix '{}'", op.node.as_str()), expr)),
            Expr::Postfix { op, .. } => Err(not_implemented(format!("postfix '{}'", op.node.as_str()), expr)),
            Expr::Member { .. } => Err(not_implemented("member access", expr)),
            Expr::Noop(_) => Err(not_implemented("placeholder expression", expr)),
        }
    }

    fn literal(&self, literal: &Name) -> Result<Value, LoweringError> {
        decode_literal(&literal.node)
            .map(Value::Literal)
            .ok_or_else(|| LoweringError::not_implemented(format!("literal {}", literal.node), literal.span))
    }

    // ========================================================================
    // Binary operators
    // ========================================================================

    fn binary(&mut self, left: &Expr, op: &Spanned<OperatorId>, right: &Expr) -> Result<Evaluated, LoweringError> {
        let Some(kind) = BinaryKind::from_operator(op.node) else {
            return Err(LoweringError::not_implemented(
                format!("operator '{}'", operators::as_str(op.node)),
                op.span,
            ));
        };

        let commands = match self.evaluate(left)? {
            Evaluated::Pure(lhs) => match self.evaluate(right)? {
                Evaluated::Pure(rhs) => vec![Command::Binary { op: kind, lhs, rhs }],
                Evaluated::Lowered(mut commands) => {
                    commands.push(Command::Binary {
                        op: kind,
                        lhs,
                        rhs: Value::Result,
                    });
                    commands
                }
            },
            Evaluated::Lowered(mut commands) => {
                let saved = (!yields_pure(right)).then(|| self.spill(&mut commands));
                let evaluated = self.evaluate(right);
                if let Some(slot) = saved {
                    self.slots.release(slot);
                }
                let lhs = saved.map_or(Value::Result, Value::Local);
                match evaluated? {
                    Evaluated::Pure(rhs) => commands.push(Command::Binary { op: kind, lhs, rhs }),
                    Evaluated::Lowered(right_commands) => {
                        commands.extend(right_commands);
                        commands.push(Command::Binary {
                            op: kind,
                            lhs,
                            rhs: Value::Result,
                        });
                    }
                }
                commands
            }
        };
        Ok(Evaluated::Lowered(commands))
    }

    // ========================================================================
    // Calls
    // ========================================================================

    /// Lower a call to the configured intrinsic.
    ///
    /// A lowered argument stays in `res` only when every argument after it is pure; otherwise it is spilled.
    fn call(&mut self, call: &CallExpr) -> Result<Evaluated, LoweringError> {
        let callee = match call.callee.as_ref() {
            Expr::Variable(name) if name.node == self.config.intrinsic => name.node.clone(),
            Expr::Variable(name) => {
                return Err(LoweringError::not_implemented(
                    format!("call to '{}'", name.node),
                    name.span,
                ));
            }
            other => return Err(not_implemented("indirect call", other)),
        };
        if let Some(generic) = call.generics.first() {
            return Err(LoweringError::not_implemented("generic call", generic.span()));
        }

        let args = &call.args.node;
        let mut commands = Vec::new();
        let mut values = Vec::with_capacity(args.len());
        let mut spilled = Vec::new();
        for (index, arg) in args.iter().enumerate() {
            match self.evaluate(arg)? {
                Evaluated::Pure(value) => values.push(value),
                Evaluated::Lowered(arg_commands) => {
                    commands.extend(arg_commands);
                    if args[index + 1..].iter().all(yields_pure) {
                        values.push(Value::Result);
                    } else {
                        let slot = self.spill(&mut commands);
                        values.push(Value::Local(slot));
                        spilled.push(slot);
                    }
                }
            }
        }

        commands.push(Command::Call { callee, args: values });
        for slot in spilled {
            self.slots.release(slot);
        }
        Ok(Evaluated::Lowered(commands))
    }

    /// Save `res` into a fresh slot.
    fn spill(&mut self, commands: &mut Vec<Command>) -> LocalSlot {
        let slot = self.slots.request();
        commands.push(Command::Assign {
            target: Place::Local(slot),
            source: Value::Result,
        });
        slot
    }
}

fn not_implemented(construct: impl Into<String>, expr: &Expr) -> LoweringError {
    LoweringError::not_implemented(construct, expr.span())
}
