//! Runtime values.
//!
//! [`Value`] is a closed enum; every operation in the interpreter matches on
//! it exhaustively. Strings, objects and functions are reference counted, so
//! cloning a value never copies its payload.

use std::fmt;
use std::rc::Rc;

use quill_ir::{FunctionDecl, Name};

use crate::{Environment, EvalResult};

/// Signature of a host-provided function.
///
/// Receives the evaluated arguments and the environment of the call site.
pub type NativeFn = Rc<dyn Fn(&[Value], &Environment) -> EvalResult>;

#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(Rc<str>),
    Object(ObjectValue),
    Function(FunctionValue),
    NativeFunction(NativeFunction),
}

impl Value {
    pub fn string(text: &str) -> Self {
        Value::String(Rc::from(text))
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native function",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::NativeFunction(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Format for display inside an object, where strings are quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            other => fmt::Display::fmt(other, f),
        }
    }
}

/// Functions compare by identity, everything else structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Rc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Object(object) => fmt::Display::fmt(object, f),
            Value::Function(func) => write!(f, "[function {}]", func.name()),
            Value::NativeFunction(native) => write!(f, "[native function {}]", native.name),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

/// An object: string keys mapped to values, in insertion order.
///
/// Objects are immutable once built; the language has no property
/// assignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectValue {
    properties: Rc<[(Name, Value)]>,
}

impl ObjectValue {
    /// Build an object from entries in order. A repeated key overwrites the
    /// earlier value but keeps its original position.
    pub fn from_entries(entries: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let mut properties: Vec<(Name, Value)> = Vec::new();
        for (key, value) in entries {
            match properties.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => properties.push((key, value)),
            }
        }
        ObjectValue {
            properties: properties.into(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.properties.iter().map(|(k, v)| (k, v))
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: ")?;
            value.fmt_nested(f)?;
        }
        f.write_str(" }")
    }
}

/// A user-defined function together with the environment it closes over.
#[derive(Clone)]
pub struct FunctionValue {
    decl: Rc<FunctionDecl>,
    closure: Environment,
}

impl FunctionValue {
    pub fn new(decl: Rc<FunctionDecl>, closure: Environment) -> Self {
        FunctionValue { decl, closure }
    }

    pub fn name(&self) -> &Name {
        &self.decl.name
    }

    pub fn params(&self) -> &[Name] {
        &self.decl.params
    }

    pub fn decl(&self) -> &FunctionDecl {
        &self.decl
    }

    /// The environment active where the function was declared.
    pub fn closure(&self) -> &Environment {
        &self.closure
    }

    /// Whether both values came from the same evaluation of a declaration.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.decl, &other.decl) && self.closure.ptr_eq(&other.closure)
    }
}

// The closure usually contains this function, so it is left out.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.decl.name)
            .field("params", &self.decl.params)
            .finish_non_exhaustive()
    }
}

/// A function implemented by the host, such as `print`.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: &'static str,
        func: impl Fn(&[Value], &Environment) -> EvalResult + 'static,
    ) -> Self {
        NativeFunction {
            name,
            func: Rc::new(func),
        }
    }

    pub fn call(&self, args: &[Value], env: &Environment) -> EvalResult {
        (self.func)(args, env)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
