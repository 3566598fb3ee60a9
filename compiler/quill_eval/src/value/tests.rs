use super::*;
use crate::Mutability;
use pretty_assertions::assert_eq;
use quill_ir::Span;

fn object(entries: &[(&str, Value)]) -> ObjectValue {
    ObjectValue::from_entries(entries.iter().map(|(k, v)| (Name::from(*k), v.clone())))
}

fn function(name: &str, params: &[&str], closure: Environment) -> FunctionValue {
    let decl = FunctionDecl {
        name: name.into(),
        params: params.iter().map(|p| Name::from(*p)).collect(),
        body: Vec::new(),
        span: Span::DUMMY,
    };
    FunctionValue::new(Rc::new(decl), closure)
}

#[test]
fn display_scalars() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Number(5.0).to_string(), "5");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Number(-3.25).to_string(), "-3.25");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::string("hi there").to_string(), "hi there");
}

#[test]
fn display_objects() {
    assert_eq!(Value::Object(ObjectValue::default()).to_string(), "{}");

    let point = object(&[("x", Value::Number(4.0)), ("y", Value::Number(1.0))]);
    assert_eq!(Value::Object(point.clone()).to_string(), "{ x: 4, y: 1 }");

    let nested = object(&[
        ("name", Value::string("pt")),
        ("at", Value::Object(point)),
        ("none", Value::Null),
    ]);
    assert_eq!(
        nested.to_string(),
        "{ name: \"pt\", at: { x: 4, y: 1 }, none: null }"
    );
}

#[test]
fn display_functions() {
    let f = function("add", &["a", "b"], Environment::new());
    assert_eq!(Value::Function(f).to_string(), "[function add]");

    let native = NativeFunction::new("print", |_, _| Ok(Value::Null));
    assert_eq!(
        Value::NativeFunction(native).to_string(),
        "[native function print]"
    );
}

#[test]
fn repeated_keys_overwrite_in_place() {
    let obj = object(&[
        ("a", Value::Number(1.0)),
        ("b", Value::Number(2.0)),
        ("a", Value::Number(3.0)),
    ]);
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
    let keys: Vec<&str> = obj.iter().map(|(k, _)| &**k).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn missing_property_is_none() {
    let obj = object(&[("a", Value::Null)]);
    assert_eq!(obj.get("b"), None);
    assert!(ObjectValue::default().is_empty());
}

#[test]
fn equality() {
    assert_eq!(Value::Number(1.0), Value::Number(1.0));
    assert_ne!(Value::Number(1.0), Value::string("1"));
    assert_ne!(Value::Null, Value::Boolean(false));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(
        Value::Object(object(&[("a", Value::Number(1.0))])),
        Value::Object(object(&[("a", Value::Number(1.0))]))
    );
}

#[test]
fn functions_compare_by_identity() {
    let env = Environment::new();
    let f = function("f", &[], env.clone());
    let same = f.clone();
    let other = function("f", &[], env);
    assert_eq!(Value::Function(f.clone()), Value::Function(same));
    assert_ne!(Value::Function(f), Value::Function(other));
}

#[test]
fn debug_skips_the_closure() {
    let env = Environment::new();
    let f = function("countdown", &["n"], env.clone());
    env.define("countdown".into(), Value::Function(f.clone()), Mutability::Constant);
    let debug = format!("{f:?}");
    assert!(debug.contains("countdown"));
    assert!(!debug.contains("LocalScope"));
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Number(0.0).type_name(), "number");
    assert_eq!(Value::Object(ObjectValue::default()).type_name(), "object");
    assert!(!Value::string("f").is_callable());
}
