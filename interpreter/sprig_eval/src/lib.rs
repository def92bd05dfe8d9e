//! Tree-walking evaluator for the Sprig interpreter.
//!
//! The pieces fit together the way a session uses them:
//!
//! - [`Environment`]: chain of shared, mutable frames; scoping and
//!   closure capture both work by extending the chain.
//! - [`register_builtins`]: seeds a root environment with the builtin
//!   operation table.
//! - [`Evaluator`]: recursive-descent evaluation of
//!   [`sprig_ir::Expr`] trees, with a depth cap, collected warnings,
//!   and a pluggable [`PrintHandler`] for `out`.
//!
//! Everything is single-threaded and synchronous; errors are values on
//! the [`EvalResult`] path, never aborts.

mod builtins;
mod environment;
pub mod errors;
mod evaluator;
mod print_handler;
mod stack;
mod value;

pub use builtins::register_builtins;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{Evaluator, MAX_EVAL_DEPTH};
pub use print_handler::PrintHandler;
pub use value::{BuiltinFn, FunctionValue, Value};
