//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{CallStack, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::builtins::register_builtins;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// ```ignore
/// let interpreter = Interpreter::builder()
///     .max_call_depth(64)
///     .print_handler(buffer_handler())
///     .build();
/// ```
#[derive(Default)]
pub struct InterpreterBuilder {
    max_call_depth: Option<usize>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of nested user function calls.
    ///
    /// Defaults to [`DEFAULT_MAX_CALL_DEPTH`].
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let env = Environment::new();
        register_builtins(&env, &print_handler);
        Interpreter {
            env,
            call_stack: CallStack::new(self.max_call_depth.unwrap_or(DEFAULT_MAX_CALL_DEPTH)),
            print_handler,
        }
    }
}
