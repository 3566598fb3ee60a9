//! Quill Eval - tree-walking interpreter for Quill programs.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values
//! - [`Environment`]: lexically scoped frames shared by calls and closures
//! - [`Interpreter`]: walks a `Program`, one `match` per node kind
//! - [`evaluate_binary`]: arithmetic and comparison on numbers
//! - [`PrintHandler`]: where the native `print` writes
//!
//! The interpreter owns the root environment, so bindings persist across
//! successive `eval_program` calls (one per REPL line).

mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{AlreadyDeclared, AssignError, Environment, Mutability};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{CallFrame, CallStack, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::{FunctionValue, NativeFn, NativeFunction, ObjectValue, Value};

#[cfg(test)]
mod tests;
