//! Postfix chains: calls, dot access and computed access.

use quill_ir::{Expr, ExprKind, Span, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// A primary expression followed by any sequence of `(args)`, `.name`
    /// and `[expr]`, so `f(1)(2)`, `o.f(1)` and `o["k"].x` all chain.
    ///
    /// Every step wraps the chain so far, so each one counts against the
    /// nesting limit.
    pub(crate) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        self.folding(Self::parse_postfix_chain)
    }

    fn parse_postfix_chain(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            let kind = self.cursor.current_kind();
            if matches!(kind, TokenKind::LParen | TokenKind::Dot | TokenKind::LBracket) {
                self.deepen()?;
            }
            expr = match kind {
                TokenKind::LParen => {
                    self.cursor.advance();
                    let (args, end) =
                        self.in_error_context(ErrorContext::CallArguments, Self::parse_arguments)?;
                    let span = expr.span.merge(end);
                    Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    )
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let token = self.cursor.current();
                    if token.kind != TokenKind::Identifier {
                        return Err(ParseError::expected_property_name(token)
                            .with_context(ErrorContext::MemberAccess));
                    }
                    self.cursor.advance();
                    let property =
                        Expr::new(ExprKind::Identifier(token.text.as_str().into()), token.span);
                    let span = expr.span.merge(token.span);
                    member(expr, property, false, span)
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let property = self.in_error_context(ErrorContext::MemberAccess, |p| {
                        p.parse_expression()
                    })?;
                    let end = self.cursor.expect(TokenKind::RBracket)?.span;
                    let span = expr.span.merge(end);
                    member(expr, property, true, span)
                }
                _ => break,
            };
        }
        Ok(expr)
    }

    /// Comma-separated arguments after `(`, through the closing `)`.
    fn parse_arguments(&mut self) -> Result<(Vec<Expr>, Span), ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let end = self.cursor.expect_described(TokenKind::RParen, "`,` or `)`")?;
        Ok((args, end.span))
    }
}

fn member(object: Expr, property: Expr, computed: bool, span: Span) -> Expr {
    Expr::new(
        ExprKind::Member {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        },
        span,
    )
}
