//! Shared intermediate representation for Quill.
//!
//! Everything the lexer produces and the parser consumes lives here, as does
//! the syntax tree the parser hands to the interpreter:
//!
//! - [`Span`]: byte range into the source text
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output
//! - [`ast`]: `Program`, statements, expressions
//! - [`BinaryOp`]: the arithmetic and comparison operators

pub mod ast;
mod operators;
mod span;
mod token;

pub use ast::{Expr, ExprKind, FunctionDecl, Program, Property, Stmt, StmtKind, VarDecl};
pub use operators::BinaryOp;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

/// An identifier as it appears in source.
///
/// Reference counted so the same name can be held by the syntax tree, by
/// environment bindings and by function values without copying the text.
pub type Name = std::rc::Rc<str>;
