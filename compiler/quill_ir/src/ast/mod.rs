//! Syntax tree produced by the parser.
//!
//! The tree is immutable once built. Statement and expression kinds are
//! closed enums so every later stage handles each node with a single `match`.
//!
//! Function declarations sit behind an `Rc`: a function value keeps its
//! declaration alive after the `Program` it came from is dropped, which is
//! what lets a REPL call a function declared on an earlier line.

use std::rc::Rc;

use crate::{BinaryOp, Name, Span};

/// A parsed source unit.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let x;`, `let x = e;`, `const x = e;`
    VariableDeclaration(VarDecl),
    /// `function name(a, b) { ... }`
    FunctionDeclaration(Rc<FunctionDecl>),
    /// A bare expression, optionally followed by `;`.
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub name: Name,
    pub constant: bool,
    /// Absent only for `let x;`.
    pub init: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Identifier(Name),
    NumericLiteral(f64),
    /// Raw text between the quotes; no escapes are processed.
    StringLiteral(Rc<str>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `target = value`. Only identifier targets are valid, which is
    /// checked when the assignment is evaluated.
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `object.property` when `computed` is false (the property is then an
    /// `Identifier`), `object[property]` when it is true.
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    ObjectLiteral(Vec<Property>),
}

impl ExprKind {
    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            ExprKind::Identifier(_) => "identifier",
            ExprKind::NumericLiteral(_) => "number literal",
            ExprKind::StringLiteral(_) => "string literal",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Assignment { .. } => "assignment",
            ExprKind::Member { .. } => "member access",
            ExprKind::Call { .. } => "call",
            ExprKind::ObjectLiteral(_) => "object literal",
        }
    }
}

/// One `key` or `key: value` entry of an object literal.
///
/// A shorthand property (`value: None`) reads the variable named `key` when
/// the literal is evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: Name,
    pub value: Option<Expr>,
    pub span: Span,
}
