//! The tree-walking interpreter.
//!
//! One `match` per node kind: [`Interpreter::eval_stmt`] for statements and
//! [`Interpreter::eval_expr`] for expressions. Every expression is evaluated
//! in an explicit [`Environment`]; the interpreter itself only owns the root
//! frame, the call stack and the print handler.

mod builder;
mod call_stack;
mod function_call;

pub use builder::InterpreterBuilder;
pub use call_stack::{CallFrame, CallStack};

use std::rc::Rc;

use quill_ir::{Expr, ExprKind, Name, Program, Property, Stmt, StmtKind};
use quill_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::{
    already_declared, constant_reassignment, invalid_assignment_target, invalid_property_key,
    not_an_object, undefined_variable,
};
use crate::{
    evaluate_binary, AssignError, Environment, EvalResult, FunctionValue, Mutability, ObjectValue,
    SharedPrintHandler, Value,
};

/// Default bound on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

pub struct Interpreter {
    /// Root frame: builtins plus top-level declarations. Persists across
    /// programs so a REPL session keeps its bindings.
    env: Environment,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter with default settings, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Evaluate every statement of `program` in the root environment.
    ///
    /// The result is the value of the last statement, or `null` for an empty
    /// program. The first error aborts the program; declarations made before
    /// it remain bound.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        debug!(statements = program.body.len(), "evaluating program");
        let env = self.env.clone();
        let result = self.eval_block(&program.body, &env);
        if result.is_err() {
            self.call_stack.clear();
        }
        result
    }

    /// Evaluate statements in order; the result is the last value.
    fn eval_block(&mut self, stmts: &[Stmt], env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        for stmt in stmts {
            last = self.eval_stmt(stmt, env)?;
        }
        Ok(last)
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match &stmt.kind {
            StmtKind::VariableDeclaration(decl) => {
                let value = match &decl.init {
                    Some(init) => self.eval_expr(init, env)?,
                    None => Value::Null,
                };
                let mutability = if decl.constant {
                    Mutability::Constant
                } else {
                    Mutability::Mutable
                };
                env.declare(decl.name.clone(), value.clone(), mutability)
                    .map_err(|_| already_declared(&decl.name).with_span(stmt.span))?;
                Ok(value)
            }
            StmtKind::FunctionDeclaration(decl) => {
                let func = Value::Function(FunctionValue::new(Rc::clone(decl), env.clone()));
                env.declare(decl.name.clone(), func.clone(), Mutability::Constant)
                    .map_err(|_| already_declared(&decl.name).with_span(stmt.span))?;
                Ok(func)
            }
            StmtKind::Expr(expr) => self.eval_expr(expr, env),
        }
    }

    /// Evaluate an expression.
    ///
    /// Errors without a location are attributed to `expr`, so the reported
    /// span is that of the innermost expression that failed.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
            .map_err(|err| err.or_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Identifier(name) => env.lookup(name).ok_or_else(|| undefined_variable(name)),
            ExprKind::NumericLiteral(n) => Ok(Value::Number(*n)),
            ExprKind::StringLiteral(s) => Ok(Value::String(Rc::clone(s))),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Ok(evaluate_binary(*op, &left, &right))
            }
            ExprKind::Assignment { target, value } => self.eval_assignment(target, value, env),
            ExprKind::Member {
                object,
                property,
                computed,
            } => self.eval_member(object, property, *computed, env),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.eval_call(&callee, &args, env, expr.span)
            }
            ExprKind::ObjectLiteral(properties) => self.eval_object(properties, env),
        }
    }

    fn eval_assignment(&mut self, target: &Expr, value: &Expr, env: &Environment) -> EvalResult {
        let ExprKind::Identifier(name) = &target.kind else {
            return Err(invalid_assignment_target(target.kind.describe()).with_span(target.span));
        };
        let value = self.eval_expr(value, env)?;
        env.assign(name, value.clone()).map_err(|err| match err {
            AssignError::Constant => constant_reassignment(name),
            AssignError::Undefined => undefined_variable(name).with_span(target.span),
        })?;
        Ok(value)
    }

    fn eval_member(
        &mut self,
        object: &Expr,
        property: &Expr,
        computed: bool,
        env: &Environment,
    ) -> EvalResult {
        let object = self.eval_expr(object, env)?;
        let key: Name = if computed {
            match self.eval_expr(property, env)? {
                Value::String(key) => key,
                other => {
                    return Err(invalid_property_key(other.type_name()).with_span(property.span))
                }
            }
        } else {
            match &property.kind {
                ExprKind::Identifier(name) => name.clone(),
                other => return Err(invalid_property_key(other.describe()).with_span(property.span)),
            }
        };
        match &object {
            Value::Object(obj) => Ok(obj.get(&key).cloned().unwrap_or(Value::Null)),
            other => Err(not_an_object(&key, other.type_name())),
        }
    }

    fn eval_object(&mut self, properties: &[Property], env: &Environment) -> EvalResult {
        let mut entries = Vec::with_capacity(properties.len());
        for property in properties {
            let value = match &property.value {
                Some(value) => self.eval_expr(value, env)?,
                None => env
                    .lookup(&property.key)
                    .ok_or_else(|| undefined_variable(&property.key).with_span(property.span))?,
            };
            entries.push((property.key.clone(), value));
        }
        Ok(Value::Object(ObjectValue::from_entries(entries)))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
