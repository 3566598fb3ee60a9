//! Assignment, object literals, and the binary operator levels.

use quill_ir::{BinaryOp, Expr, ExprKind, Property, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Entry point for any expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// `target = value`, right-associative. The target is not validated
    /// here; only identifier targets are accepted at evaluation time.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let target = p.parse_object_or_additive()?;
            if !p.cursor.eat(TokenKind::Equals) {
                return Ok(target);
            }
            let value = p.parse_assignment()?;
            let span = target.span.merge(value.span);
            Ok(Expr::new(
                ExprKind::Assignment {
                    target: Box::new(target),
                    value: Box::new(value),
                },
                span,
            ))
        })
    }

    fn parse_object_or_additive(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::LBrace) {
            self.in_error_context(ErrorContext::ObjectLiteral, Self::parse_object_literal)
        } else {
            self.parse_additive()
        }
    }

    /// `{ key: value, shorthand, ... }`
    fn parse_object_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut properties = Vec::new();

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let (key, key_span) = self.cursor.expect_ident("property key")?;

            if self.cursor.check(TokenKind::Comma) || self.cursor.check(TokenKind::RBrace) {
                self.cursor.eat(TokenKind::Comma);
                properties.push(Property {
                    key,
                    value: None,
                    span: key_span,
                });
                continue;
            }

            self.cursor
                .expect_described(TokenKind::Colon, "`:`, `,` or `}`")?;
            let value = self.parse_expression()?;
            let span = key_span.merge(value.span);
            properties.push(Property {
                key,
                value: Some(value),
                span,
            });

            if !self.cursor.check(TokenKind::RBrace) {
                self.cursor.expect_described(TokenKind::Comma, "`,` or `}`")?;
            }
        }

        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(Expr::new(
            ExprKind::ObjectLiteral(properties),
            start.merge(end),
        ))
    }

    /// `+ - < >`
    ///
    /// Each fold nests the tree one level deeper on the left, so it counts
    /// against the nesting limit like a parenthesis does.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.folding(|p| {
            let mut left = p.parse_multiplicative()?;
            while let Some(op) = p.match_additive_op() {
                p.deepen()?;
                p.cursor.advance();
                let right = p.parse_multiplicative()?;
                left = binary(op, left, right);
            }
            Ok(left)
        })
    }

    /// `* / %`
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.folding(|p| {
            let mut left = p.parse_postfix()?;
            while let Some(op) = p.match_multiplicative_op() {
                p.deepen()?;
                p.cursor.advance();
                let right = p.parse_postfix()?;
                left = binary(op, left, right);
            }
            Ok(left)
        })
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        self.cursor
            .current_kind()
            .binary_op()
            .filter(|op| matches!(op, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Lt | BinaryOp::Gt))
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        self.cursor
            .current_kind()
            .binary_op()
            .filter(|op| matches!(op, BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod))
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}
