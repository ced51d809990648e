//! Linear Intermediate Representation (IR)
//!
//! The IR is a flat list of commands per function. Operands are registers, globals, arguments, literals and
//! numbered local slots; intermediate results pass through the single `res` register. Only `if` and `while` nest.
//!
//! ## Pipeline
//!
//! ```text
//! AST function body → lower → Vec<Command> + local count
//! ```
//!
//! ## Example
//!
//! ```text
//! fn main(1) {
//!     call test, ()
//!     mov l$0, res
//!     call test, ()
//!     mul l$0, res
//! }
//! ```

pub mod command;
pub mod lower;
pub mod value;

pub use command::{BinaryKind, Command};
pub use lower::{LoweredFunction, LoweringConfig, LoweringError, lower_function, lower_program};
pub use value::{LocalSlot, Place, Value};
