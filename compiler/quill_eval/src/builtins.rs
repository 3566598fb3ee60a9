//! Bindings present in every root environment.

use std::fmt::Write;

use crate::{Environment, Mutability, NativeFunction, SharedPrintHandler, Value};

/// Install `true`, `false`, `null` and `print`, all constant.
pub(crate) fn register_builtins(env: &Environment, print_handler: &SharedPrintHandler) {
    env.define("true".into(), Value::Boolean(true), Mutability::Constant);
    env.define("false".into(), Value::Boolean(false), Mutability::Constant);
    env.define("null".into(), Value::Null, Mutability::Constant);

    let handler = SharedPrintHandler::clone(print_handler);
    let print = NativeFunction::new("print", move |args, _env| {
        handler.println(&print_line(args));
        Ok(Value::Null)
    });
    env.define(
        "print".into(),
        Value::NativeFunction(print),
        Mutability::Constant,
    );
}

/// Display forms of `args`, separated by single spaces.
fn print_line(args: &[Value]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{arg}");
    }
    line
}
