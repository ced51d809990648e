//! AST to IR lowering pass.
//!
//! This module turns function bodies into the linear command form defined in [`crate::backend::ir`]. The pass
//! is partial on purpose. Expression statements built from literals, the arithmetic/logical/comparison operators
//! and calls to the configured intrinsic are lowered. Everything else ends lowering of that function with
//! [`LoweringError::NotImplemented`].
//!
//! # Architecture
//!
//! Lowering state lives in one context struct per function, [`FunctionLowering`], whose `impl` blocks are split
//! across submodules:
//!
//! - `errors` - The fatal [`LoweringError`]
//! - `slots` - Temporary local allocation with last-in-first-out reuse
//! - `decl` - Program walking and the per-function entry point
//! - `stmt` - Statement lowering
//! - `expr` - Expression evaluation
//!
//! # Usage
//!
//! ```rust
//! use bramble::backend::ir::lower::{LoweringConfig, lower_program};
//! use bramble_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("fn main() -> void { test(1 + 2) }").tokens;
//! let program = parser::parse(&tokens).program;
//!
//! let lowered = lower_program(&program, &LoweringConfig::default());
//! let main = lowered[0].as_ref().unwrap();
//! assert_eq!(main.to_string(), "fn main(0) {\n    add 1, 2\n    call test, (res)\n}");
//! ```

mod decl;
mod errors;
mod expr;
mod slots;
mod stmt;

use std::fmt;

use bramble_syntax::ast::Span;
use bramble_syntax::diagnostics::Diagnostic;

use super::command::Command;
use slots::SlotArena;

pub use decl::{lower_function, lower_program};
pub use errors::LoweringError;

/// Knobs for the lowering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweringConfig {
    /// The one call target lowering understands. Calls to anything else are not implemented.
    pub intrinsic: String,
}

impl Default for LoweringConfig {
    fn default() -> Self {
        Self {
            intrinsic: "test".to_string(),
        }
    }
}

/// A successfully lowered function.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredFunction {
    pub name: String,
    pub commands: Vec<Command>,
    /// Number of distinct local slots the commands use.
    pub locals: usize,
    /// Warnings raised while lowering. Lowering never raises errors as diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for LoweredFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fn {}({}) {{", self.name, self.locals)?;
        for command in &self.commands {
            writeln!(f, "    {}", command)?;
        }
        write!(f, "}}")
    }
}

/// Per-function lowering context.
///
/// Owns the slot arena, the command buffer and the warnings of one function. Nothing is shared between
/// functions, so independent functions can be lowered in any order.
struct FunctionLowering<'a> {
    config: &'a LoweringConfig,
    slots: SlotArena,
    commands: Vec<Command>,
    diagnostics: Vec<Diagnostic>,
    /// Reported for constructs that carry no span of their own.
    fallback_span: Span,
}

impl<'a> FunctionLowering<'a> {
    fn new(config: &'a LoweringConfig, fallback_span: Span) -> Self {
        Self {
            config,
            slots: SlotArena::new(),
            commands: Vec::new(),
            diagnostics: Vec::new(),
            fallback_span,
        }
    }
}
