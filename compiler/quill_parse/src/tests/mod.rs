//! Parser tests.
//!
//! - `statements`: declarations and expression statements
//! - `expressions`: precedence, postfix chains, object literals
//! - `errors`: rejected programs and the errors they produce

mod expressions;

use crate::{parse, ParseError, Parser};
use quill_ir::{Expr, ExprKind, Program, StmtKind};

#[expect(clippy::unwrap_used, reason = "test sources always lex")]
fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = quill_lexer::lex(source).unwrap();
    parse(&tokens)
}

#[expect(clippy::unwrap_used, reason = "test sources always lex")]
fn parse_with_depth(source: &str, depth: usize) -> Result<Program, ParseError> {
    let tokens = quill_lexer::lex(source).unwrap();
    Parser::new(&tokens).with_max_depth(depth).parse_program()
}

/// Parse a program that must consist of exactly one expression statement.
fn parse_expr(source: &str) -> Expr {
    let program = match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("`{source}` failed to parse: {err}"),
    };
    assert_eq!(program.body.len(), 1, "`{source}` is not a single statement");
    match program.body.into_iter().next().map(|s| s.kind) {
        Some(StmtKind::Expr(expr)) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(program) => panic!("`{source}` parsed unexpectedly: {program:?}"),
        Err(err) => err,
    }
}

/// Compact rendering of an expression tree for structural assertions.
fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Identifier(name) => name.to_string(),
        ExprKind::NumericLiteral(n) => n.to_string(),
        ExprKind::StringLiteral(s) => format!("{s:?}"),
        ExprKind::Binary { op, left, right } => {
            format!("({op} {} {})", sexpr(left), sexpr(right))
        }
        ExprKind::Assignment { target, value } => {
            format!("(= {} {})", sexpr(target), sexpr(value))
        }
        ExprKind::Member {
            object,
            property,
            computed: false,
        } => format!("(. {} {})", sexpr(object), sexpr(property)),
        ExprKind::Member {
            object,
            property,
            computed: true,
        } => format!("([] {} {})", sexpr(object), sexpr(property)),
        ExprKind::Call { callee, args } => {
            let mut out = format!("(call {}", sexpr(callee));
            for arg in args {
                out.push(' ');
                out.push_str(&sexpr(arg));
            }
            out.push(')');
            out
        }
        ExprKind::ObjectLiteral(properties) => {
            let fields: Vec<String> = properties
                .iter()
                .map(|p| match &p.value {
                    Some(value) => format!("{}: {}", p.key, sexpr(value)),
                    None => p.key.to_string(),
                })
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}
