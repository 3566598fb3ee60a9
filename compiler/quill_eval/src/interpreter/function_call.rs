//! Function call evaluation.

use quill_ir::Span;

use super::{CallFrame, Interpreter};
use crate::errors::{already_declared, arity_mismatch, not_callable};
use crate::{Environment, EvalResult, FunctionValue, Mutability, Value};

impl Interpreter {
    /// Call an already evaluated callee with already evaluated arguments.
    ///
    /// `env` is the caller's environment; only native functions see it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_call(
        &mut self,
        callee: &Value,
        args: &[Value],
        env: &Environment,
        call_span: Span,
    ) -> EvalResult {
        match callee {
            Value::NativeFunction(native) => native.call(args, env),
            Value::Function(func) => {
                self.call_stack.push(CallFrame {
                    name: func.name().clone(),
                    call_span,
                })?;
                let result = self.call_function(func, args);
                self.call_stack.pop();
                result
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run `func`'s body in a fresh child of its closure environment.
    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> EvalResult {
        let params = func.params();
        if args.len() != params.len() {
            return Err(arity_mismatch(func.name(), params.len(), args.len()));
        }

        let call_env = func.closure().child();
        for (param, arg) in params.iter().zip(args) {
            call_env
                .declare(param.clone(), arg.clone(), Mutability::Mutable)
                .map_err(|_| already_declared(param).with_span(func.decl().span))?;
        }
        self.eval_block(&func.decl().body, &call_env)
    }
}
