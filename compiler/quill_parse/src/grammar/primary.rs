//! Primary expressions.

use quill_ir::{Expr, ExprKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Identifier, number, string, or a parenthesized expression.
    ///
    /// Parentheses only group; they produce no node of their own.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Identifier => {
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Identifier(token.text.as_str().into()),
                    token.span,
                ))
            }
            TokenKind::Number => {
                self.cursor.advance();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::invalid_number(&token.text, token.span))?;
                Ok(Expr::new(ExprKind::NumericLiteral(value), token.span))
            }
            TokenKind::String => {
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::StringLiteral(token.text.as_str().into()),
                    token.span,
                ))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner =
                    self.in_error_context(ErrorContext::Parenthesized, Self::parse_expression)?;
                let end = self.cursor.expect(TokenKind::RParen)?.span;
                Ok(Expr::new(inner.kind, token.span.merge(end)))
            }
            _ => Err(ParseError::expected_expression(token)),
        }
    }
}
