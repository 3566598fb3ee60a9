//! Evaluation tests that run source text through the lexer and parser.
//!
//! - `expressions_tests`: literals, operators, objects, member access
//! - `declarations_tests`: `let`, `const`, assignment
//! - `functions_tests`: calls, closures, scoping, recursion
//! - `errors_tests`: runtime errors and their spans
//! - `properties_tests`: generated inputs

mod declarations_tests;
mod properties_tests;

use crate::{buffer_handler, EvalError, EvalResult, Interpreter, Value};

/// An interpreter whose `print` output is captured.
pub(crate) fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(buffer_handler()).build()
}

/// Lex, parse and evaluate `source` in `interpreter`.
pub(crate) fn run_in(interpreter: &mut Interpreter, source: &str) -> EvalResult {
    let tokens = match quill_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("`{source}` failed to lex: {err}"),
    };
    let program = match quill_parse::parse(&tokens) {
        Ok(program) => program,
        Err(err) => panic!("`{source}` failed to parse: {err}"),
    };
    interpreter.eval_program(&program)
}

pub(crate) fn eval(source: &str) -> Value {
    match run_in(&mut interpreter(), source) {
        Ok(value) => value,
        Err(err) => panic!("`{source}` failed: {err}"),
    }
}

pub(crate) fn eval_error(source: &str) -> EvalError {
    match run_in(&mut interpreter(), source) {
        Ok(value) => panic!("`{source}` evaluated to {value} instead of failing"),
        Err(err) => err,
    }
}

/// Evaluate `source` and return what it printed.
pub(crate) fn printed(source: &str) -> String {
    let mut interpreter = interpreter();
    if let Err(err) = run_in(&mut interpreter, source) {
        panic!("`{source}` failed: {err}");
    }
    interpreter.print_handler().output()
}
