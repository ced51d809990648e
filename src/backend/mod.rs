//! Bramble compiler back end.
//!
//! The back end currently consists of the IR and the lowering pass that produces it:
//!
//! ```text
//! source → tokens → AST → IR
//! ```
//!
//! ## Module Organization
//!
//! - `ir/` - IR operands and commands, plus lowering from the AST

pub mod ir;
