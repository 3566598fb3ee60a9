//! Statements: declarations and expression statements.

use std::rc::Rc;

use quill_ir::{FunctionDecl, Name, Stmt, StmtKind, TokenKind, VarDecl};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let | TokenKind::Const => self.in_error_context(
                ErrorContext::VariableDeclaration,
                Self::parse_variable_declaration,
            ),
            TokenKind::Function => self.in_error_context(
                ErrorContext::FunctionDeclaration,
                Self::parse_function_declaration,
            ),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let name;` | `let name = expr;` | `const name = expr;`
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let constant = keyword.kind == TokenKind::Const;
        let (name, name_span) = self.cursor.expect_ident("variable name")?;

        if self.cursor.check(TokenKind::Semicolon) {
            if constant {
                return Err(ParseError::missing_const_initializer(name, name_span));
            }
            let end = self.cursor.advance().span;
            let decl = VarDecl {
                name,
                constant,
                init: None,
            };
            return Ok(Stmt::new(
                StmtKind::VariableDeclaration(decl),
                keyword.span.merge(end),
            ));
        }

        self.cursor.expect_described(TokenKind::Equals, "`=` or `;`")?;
        let init = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::Semicolon)?.span;
        let decl = VarDecl {
            name,
            constant,
            init: Some(init),
        };
        Ok(Stmt::new(
            StmtKind::VariableDeclaration(decl),
            keyword.span.merge(end),
        ))
    }

    /// `function name(a, b) { statements }`
    fn parse_function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident("function name")?;
        self.cursor.expect(TokenKind::LParen)?;
        let params = self.in_error_context(ErrorContext::FunctionParams, Self::parse_params)?;
        self.cursor.expect(TokenKind::LBrace)?;
        let body = self.nested(|p| {
            let mut body = Vec::new();
            while !p.cursor.check(TokenKind::RBrace) && !p.cursor.is_at_end() {
                body.push(p.parse_statement()?);
            }
            Ok(body)
        })?;
        let end = self.cursor.expect(TokenKind::RBrace)?.span;

        let span = start.merge(end);
        let decl = FunctionDecl {
            name,
            params,
            body,
            span,
        };
        Ok(Stmt::new(StmtKind::FunctionDeclaration(Rc::new(decl)), span))
    }

    /// Parameter names after `(`, through the closing `)`.
    fn parse_params(&mut self) -> Result<Vec<Name>, ParseError> {
        let mut params: Vec<Name> = Vec::new();
        let mut spans = Vec::new();
        if self.cursor.eat(TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let (param, span) = self.cursor.expect_ident("parameter name")?;
            if let Some(i) = params.iter().position(|p| *p == param) {
                return Err(ParseError::duplicate_parameter(param, spans[i], span));
            }
            params.push(param);
            spans.push(span);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect_described(TokenKind::RParen, "`,` or `)`")?;
        Ok(params)
    }

    /// An expression, optionally terminated by `;`.
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        let mut span = expr.span;
        if self.cursor.check(TokenKind::Semicolon) {
            span = span.merge(self.cursor.advance().span);
        }
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }
}
