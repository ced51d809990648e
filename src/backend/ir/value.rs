//! Operands of IR commands.
//!
//! Every operand renders to a fixed textual form, which is what the `fn NAME(SLOTS) { ... }` listing is built
//! from:
//!
//! | Operand            | Text              |
//! |--------------------|-------------------|
//! | global             | `g$name`          |
//! | local slot         | `l$N`             |
//! | instance register  | `this`            |
//! | result register    | `res`             |
//! | argument           | `aN`              |
//! | literal            | `"text"` / `1.5`  |
//! | external reporter  | `(extern "code")` |

use std::fmt;

use bramble_syntax::lexer::LiteralValue;

/// Index of a temporary local handed out by the lowering slot arena.
///
/// Slots can only be created by the lowering pass, so every `LocalSlot` in a command list refers to a slot that
/// was counted in the function's local total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalSlot(usize);

impl LocalSlot {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l${}", self.0)
    }
}

/// A readable IR operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsafe global variable.
    Global(String),
    Local(LocalSlot),
    /// Class instance. Writable only inside inline members.
    This,
    /// The shared `res` register. Binary operations, calls and external reporters leave their result here.
    Result,
    /// Immutable function argument by position.
    Argument(usize),
    Literal(LiteralValue),
    /// Host-provided expression; its result lands in `res`.
    ExternalReporter(String),
}

impl Value {
    pub fn string(text: impl Into<String>) -> Self {
        Value::Literal(LiteralValue::Str(text.into()))
    }

    pub fn number(value: f64) -> Self {
        Value::Literal(LiteralValue::Number(value))
    }
}

impl From<Place> for Value {
    fn from(place: Place) -> Self {
        match place {
            Place::Global(name) => Value::Global(name),
            Place::Local(slot) => Value::Local(slot),
            Place::This => Value::This,
            Place::Result => Value::Result,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Global(name) => write!(f, "g${}", name),
            Value::Local(slot) => write!(f, "{}", slot),
            Value::This => write!(f, "this"),
            Value::Result => write!(f, "res"),
            Value::Argument(index) => write!(f, "a{}", index),
            Value::Literal(literal) => fmt_literal(literal, f),
            Value::ExternalReporter(code) => write!(f, "(extern {})", quoted(code)),
        }
    }
}

/// A writable IR operand: the target of `mov`.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    Global(String),
    Local(LocalSlot),
    This,
    Result,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::from(self.clone()))
    }
}

/// JSON rendering: strings are quoted and escaped, integral numbers carry no fraction.
fn fmt_literal(literal: &LiteralValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match literal {
        LiteralValue::Str(text) => write!(f, "{}", quoted(text)),
        // JSON has no spelling for NaN or the infinities.
        LiteralValue::Number(value) if !value.is_finite() => write!(f, "null"),
        LiteralValue::Number(value) => write!(f, "{}", value),
    }
}

pub(crate) fn quoted(text: &str) -> serde_json::Value {
    serde_json::Value::String(text.to_string())
}
