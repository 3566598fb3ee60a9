use super::{eval, interpreter, run_in};
use crate::{EvalErrorKind, Mutability, Value};
use pretty_assertions::assert_eq;

#[test]
fn let_binds_a_value() {
    assert_eq!(eval("let x = 5; x"), Value::Number(5.0));
}

#[test]
fn declaration_evaluates_to_the_declared_value() {
    assert_eq!(eval("let x = 3;"), Value::Number(3.0));
    assert_eq!(eval("const s = \"c\";"), Value::string("c"));
    assert_eq!(eval("let x;"), Value::Null);
}

#[test]
fn let_without_initializer_is_null_and_mutable() {
    let mut interp = interpreter();
    assert_eq!(run_in(&mut interp, "let x;"), Ok(Value::Null));
    assert_eq!(interp.env().lookup("x"), Some(Value::Null));
    assert_eq!(interp.env().mutability("x"), Some(Mutability::Mutable));
    assert_eq!(run_in(&mut interp, "x = 1; x"), Ok(Value::Number(1.0)));
}

#[test]
fn const_is_constant() {
    let mut interp = interpreter();
    assert_eq!(run_in(&mut interp, "const x = 5;"), Ok(Value::Number(5.0)));
    assert_eq!(interp.env().mutability("x"), Some(Mutability::Constant));
}

#[test]
fn reassigning_a_constant_fails() {
    let err = run_in(&mut interpreter(), "const x = 5; x = 6;").map_err(|e| e.kind);
    assert_eq!(
        err,
        Err(EvalErrorKind::ConstantReassignment { name: "x".into() })
    );
}

#[test]
fn constant_keeps_its_value_after_a_failed_assignment() {
    let mut interp = interpreter();
    assert!(run_in(&mut interp, "const x = 5; x = 6;").is_err());
    assert_eq!(run_in(&mut interp, "x"), Ok(Value::Number(5.0)));
}

#[test]
fn assignment_evaluates_to_the_assigned_value() {
    assert_eq!(eval("let x = 1; x = 7"), Value::Number(7.0));
    assert_eq!(eval("let x = 1; x = 2; x"), Value::Number(2.0));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(eval("let a; let b; a = b = 3; a + b"), Value::Number(6.0));
}

#[test]
fn redeclaring_fails() {
    let err = run_in(&mut interpreter(), "let x = 1; let x = 2;").map_err(|e| e.kind);
    assert_eq!(err, Err(EvalErrorKind::AlreadyDeclared { name: "x".into() }));
}

#[test]
fn builtins_are_constant_and_declared() {
    let mut interp = interpreter();
    assert_eq!(
        run_in(&mut interp, "true = 1").map_err(|e| e.kind),
        Err(EvalErrorKind::ConstantReassignment {
            name: "true".into()
        })
    );
    assert_eq!(
        run_in(&mut interp, "let print = 1;").map_err(|e| e.kind),
        Err(EvalErrorKind::AlreadyDeclared {
            name: "print".into()
        })
    );
    for name in ["true", "false", "null", "print"] {
        assert_eq!(interp.env().mutability(name), Some(Mutability::Constant));
    }
}

#[test]
fn bindings_persist_across_programs() {
    let mut interp = interpreter();
    assert_eq!(run_in(&mut interp, "let x = 2;"), Ok(Value::Number(2.0)));
    assert_eq!(run_in(&mut interp, "x * 5"), Ok(Value::Number(10.0)));
    assert!(run_in(&mut interp, "function sq(n) { n * n }").is_ok());
    assert_eq!(run_in(&mut interp, "sq(4)"), Ok(Value::Number(16.0)));
}

#[test]
fn declarations_before_an_error_survive() {
    let mut interp = interpreter();
    assert!(run_in(&mut interp, "let a = 1; b; let c = 3;").is_err());
    assert_eq!(run_in(&mut interp, "a"), Ok(Value::Number(1.0)));
    assert_eq!(interp.env().lookup("c"), None);
}
