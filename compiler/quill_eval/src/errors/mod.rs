//! Evaluation errors and their constructors.
//!
//! Every runtime failure is an [`EvalError`]: a structured
//! [`EvalErrorKind`] plus the span of the expression that failed. The
//! constructors below leave the span empty; the interpreter fills it in from
//! the innermost expression being evaluated when the error surfaces.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Name, Span};

/// Result of evaluating anything.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// A runtime error. Fatal: it aborts the program being evaluated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: Name },
    #[error("cannot assign to constant `{name}`")]
    ConstantReassignment { name: Name },
    #[error("`{name}` is already declared in this scope")]
    AlreadyDeclared { name: Name },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },
    #[error("`{name}` takes {expected} {}, but {found} {} supplied", arguments(.expected), were(.found))]
    ArityMismatch {
        name: Name,
        expected: usize,
        found: usize,
    },
    #[error("cannot assign to {target}")]
    InvalidAssignmentTarget { target: &'static str },
    #[error("property key must be a string, found {type_name}")]
    InvalidPropertyKey { type_name: &'static str },
    #[error("cannot read property `{property}` of {type_name}")]
    NotAnObject {
        property: Name,
        type_name: &'static str,
    },
    #[error("call depth exceeded the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "called from the derived Display")]
fn arguments(n: &usize) -> &'static str {
    if *n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "called from the derived Display")]
fn were(n: &usize) -> &'static str {
    if *n == 1 {
        "was"
    } else {
        "were"
    }
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already recorded.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2001,
            EvalErrorKind::ConstantReassignment { .. } => ErrorCode::E2002,
            EvalErrorKind::AlreadyDeclared { .. } => ErrorCode::E2003,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E2004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2005,
            EvalErrorKind::InvalidAssignmentTarget { .. } => ErrorCode::E2006,
            EvalErrorKind::InvalidPropertyKey { .. } => ErrorCode::E2007,
            EvalErrorKind::NotAnObject { .. } => ErrorCode::E2008,
            EvalErrorKind::RecursionLimitExceeded { .. } => ErrorCode::E2009,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span {
            let label = match &self.kind {
                EvalErrorKind::UndefinedVariable { .. } => "not found in this scope",
                EvalErrorKind::ConstantReassignment { .. } => "assignment to a constant",
                EvalErrorKind::AlreadyDeclared { .. } => "second declaration here",
                EvalErrorKind::NotCallable { .. } => "called here",
                EvalErrorKind::ArityMismatch { .. } => "wrong number of arguments",
                EvalErrorKind::InvalidAssignmentTarget { .. } => "not a variable",
                EvalErrorKind::InvalidPropertyKey { .. } => "expected a string",
                EvalErrorKind::NotAnObject { .. } => "not an object",
                EvalErrorKind::RecursionLimitExceeded { .. } => "limit reached in this call",
            };
            diag = diag.with_label(span, label);
        }
        match &self.kind {
            EvalErrorKind::ConstantReassignment { name } => {
                diag.with_suggestion(format!("declare it with `let {name}` to allow reassignment"))
            }
            EvalErrorKind::AlreadyDeclared { .. } => {
                diag.with_note("a name may be declared once per scope; use `=` to reassign it")
            }
            EvalErrorKind::NotCallable { .. } => {
                diag.with_note("only functions can be called")
            }
            EvalErrorKind::InvalidAssignmentTarget { .. } => {
                diag.with_note("only variables can be assigned to")
            }
            EvalErrorKind::RecursionLimitExceeded { .. } => {
                diag.with_suggestion("raise the limit with `--max-call-depth`")
            }
            _ => diag,
        }
    }
}

pub fn undefined_variable(name: &Name) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable { name: name.clone() })
}

pub fn constant_reassignment(name: &Name) -> EvalError {
    EvalError::new(EvalErrorKind::ConstantReassignment { name: name.clone() })
}

pub fn already_declared(name: &Name) -> EvalError {
    EvalError::new(EvalErrorKind::AlreadyDeclared { name: name.clone() })
}

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name })
}

pub fn arity_mismatch(name: &Name, expected: usize, found: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.clone(),
        expected,
        found,
    })
}

pub fn invalid_assignment_target(target: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidAssignmentTarget { target })
}

pub fn invalid_property_key(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidPropertyKey { type_name })
}

pub fn not_an_object(property: &Name, type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAnObject {
        property: property.clone(),
        type_name,
    })
}

pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimitExceeded { limit })
}
