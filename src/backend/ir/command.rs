//! IR commands.
//!
//! A command list is linear except for `if` and `while`, which carry nested bodies. Nested bodies render inline
//! with each command followed by `;`.

use std::fmt;

use bramble_core::lang::operators::OperatorId;

use super::value::{Place, Value, quoted};

/// Two-operand operations. The result is stored in `res`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitwiseAnd,
    BitwiseOr,
    And,
    Or,
    Lt,
    Gt,
    Eq,
}

impl BinaryKind {
    /// Map a source operator to its IR operation, if it has one.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryKind::Add,
            OperatorId::Minus => BinaryKind::Sub,
            OperatorId::Star => BinaryKind::Mul,
            OperatorId::Slash => BinaryKind::Div,
            OperatorId::Percent => BinaryKind::Mod,
            OperatorId::Amp => BinaryKind::BitwiseAnd,
            OperatorId::Pipe => BinaryKind::BitwiseOr,
            OperatorId::AmpAmp => BinaryKind::And,
            OperatorId::PipePipe => BinaryKind::Or,
            OperatorId::Lt => BinaryKind::Lt,
            OperatorId::Gt => BinaryKind::Gt,
            OperatorId::EqEq => BinaryKind::Eq,
            _ => return None,
        })
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            BinaryKind::Add => "add",
            BinaryKind::Sub => "sub",
            BinaryKind::Mul => "mul",
            BinaryKind::Div => "div",
            BinaryKind::Mod => "mod",
            BinaryKind::BitwiseAnd => "bitwise_and",
            BinaryKind::BitwiseOr => "bitwise_or",
            BinaryKind::And => "and",
            BinaryKind::Or => "or",
            BinaryKind::Lt => "lt",
            BinaryKind::Gt => "gt",
            BinaryKind::Eq => "eq",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `mov target, source`
    Assign { target: Place, source: Value },
    /// `add lhs, rhs` and friends
    Binary { op: BinaryKind, lhs: Value, rhs: Value },
    /// `call name, (args)`
    Call { callee: String, args: Vec<Value> },
    /// `extern "code"`: host intrinsic with no result.
    External(String),
    /// `if cond {..} else {..}`
    If {
        condition: Value,
        body: Vec<Command>,
        alternate: Option<Vec<Command>>,
    },
    /// `while cond {..}`
    While { condition: Value, body: Vec<Command> },
    /// `ret [value]`; also releases the function's locals.
    Return(Option<Value>),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Assign { target, source } => write!(f, "mov {}, {}", target, source),
            Command::Binary { op, lhs, rhs } => write!(f, "{} {}, {}", op.mnemonic(), lhs, rhs),
            Command::Call { callee, args } => {
                write!(f, "call {}, (", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Command::External(code) => write!(f, "extern {}", quoted(code)),
            Command::If {
                condition,
                body,
                alternate,
            } => {
                write!(f, "if {} ", condition)?;
                fmt_body(body, f)?;
                if let Some(alternate) = alternate {
                    write!(f, " else ")?;
                    fmt_body(alternate, f)?;
                }
                Ok(())
            }
            Command::While { condition, body } => {
                write!(f, "while {} ", condition)?;
                fmt_body(body, f)
            }
            Command::Return(None) => write!(f, "ret"),
            Command::Return(Some(value)) => write!(f, "ret {}", value),
        }
    }
}

fn fmt_body(body: &[Command], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for command in body {
        write!(f, "{};", command)?;
    }
    write!(f, "}}")
}
