//! Token cursor.
//!
//! Position-based access into a [`TokenList`]. The list always ends in
//! `Eof`, and the cursor never moves past it, so `current()` is always
//! valid.

use quill_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        let tokens = self.tokens;
        tokens.get(self.pos).unwrap_or_else(|| tokens.eof())
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. At `Eof` this returns
    /// `Eof` without moving.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            tracing::trace!(?token, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail naming it as the expectation.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.expect_described(kind, kind.display_name())
    }

    /// Consume a token of `kind`; on mismatch, report `expected` (which may
    /// list alternatives, e.g. "`,` or `)`").
    pub fn expect_described(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(expected, self.current()))
        }
    }

    /// Consume an identifier; `what` names the role it plays ("parameter
    /// name", "property key", ...).
    pub fn expect_ident(&mut self, what: &'static str) -> Result<(Name, Span), ParseError> {
        let token = self.current();
        if token.kind == TokenKind::Identifier {
            self.advance();
            Ok((Name::from(token.text.as_str()), token.span))
        } else {
            Err(ParseError::expected_identifier(what, token))
        }
    }
}
