//! Parse errors.
//!
//! A [`ParseError`] is a kind, the span it happened at, and optionally an
//! [`ErrorContext`] naming the construct being parsed, which becomes a
//! "while parsing ..." note in the diagnostic.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Name, Span, Token, TokenKind};

/// The construct the parser was inside when an error happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    VariableDeclaration,
    FunctionDeclaration,
    FunctionParams,
    ObjectLiteral,
    CallArguments,
    MemberAccess,
    Parenthesized,
}

impl ErrorContext {
    /// Phrase for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::VariableDeclaration => "a variable declaration",
            Self::FunctionDeclaration => "a function declaration",
            Self::FunctionParams => "function parameters",
            Self::ObjectLiteral => "an object literal",
            Self::CallArguments => "call arguments",
            Self::MemberAccess => "a member access",
            Self::Parenthesized => "a parenthesized expression",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("expected {what}, found {found}")]
    ExpectedIdentifier { what: &'static str, found: String },
    #[error("expected property name after `.`, found {found}")]
    ExpectedPropertyName { found: String },
    #[error("missing initializer in const declaration of `{name}`")]
    MissingConstInitializer { name: Name },
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    #[error("duplicate parameter `{name}`")]
    DuplicateParameter { name: Name, first: Span },
}

/// How a token is named in "found ..." messages.
pub(crate) fn describe_token(token: &Token) -> String {
    match token.kind {
        TokenKind::Identifier => format!("identifier `{}`", token.text),
        TokenKind::Number => format!("number `{}`", token.text),
        TokenKind::String => format!("string \"{}\"", token.text),
        TokenKind::Let | TokenKind::Const | TokenKind::Function => {
            format!("keyword {}", token.kind)
        }
        kind => kind.display_name().to_string(),
    }
}

impl ParseError {
    fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: describe_token(found),
            },
            found.span,
        )
    }

    pub(crate) fn expected_expression(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::ExpectedExpression {
                found: describe_token(found),
            },
            found.span,
        )
    }

    pub(crate) fn expected_identifier(what: &'static str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::ExpectedIdentifier {
                what,
                found: describe_token(found),
            },
            found.span,
        )
    }

    pub(crate) fn expected_property_name(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::ExpectedPropertyName {
                found: describe_token(found),
            },
            found.span,
        )
    }

    pub(crate) fn missing_const_initializer(name: Name, span: Span) -> Self {
        Self::new(ParseErrorKind::MissingConstInitializer { name }, span)
    }

    pub(crate) fn invalid_number(text: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            },
            span,
        )
    }

    pub(crate) fn nesting_too_deep(limit: usize, span: Span) -> Self {
        Self::new(ParseErrorKind::NestingTooDeep { limit }, span)
    }

    pub(crate) fn duplicate_parameter(name: Name, first: Span, span: Span) -> Self {
        Self::new(ParseErrorKind::DuplicateParameter { name, first }, span)
    }

    /// Record the enclosing construct, keeping the innermost one.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedIdentifier { .. }
            | ParseErrorKind::ExpectedPropertyName { .. } => ErrorCode::E1003,
            ParseErrorKind::MissingConstInitializer { .. } => ErrorCode::E1004,
            ParseErrorKind::InvalidNumber { .. } => ErrorCode::E1005,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1006,
            ParseErrorKind::DuplicateParameter { .. } => ErrorCode::E1007,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected an expression".to_string(),
            ParseErrorKind::ExpectedIdentifier { what, .. } => format!("expected {what}"),
            ParseErrorKind::ExpectedPropertyName { .. } => {
                "expected a property name".to_string()
            }
            ParseErrorKind::MissingConstInitializer { .. } => {
                "constant declared without a value".to_string()
            }
            ParseErrorKind::InvalidNumber { .. } => "not a valid number".to_string(),
            ParseErrorKind::NestingTooDeep { .. } => "nesting limit reached here".to_string(),
            ParseErrorKind::DuplicateParameter { .. } => "already a parameter".to_string(),
        };

        let mut diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);

        if let ParseErrorKind::DuplicateParameter { first, .. } = &self.kind {
            diag = diag.with_secondary_label(*first, "first declared here");
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        match &self.kind {
            ParseErrorKind::MissingConstInitializer { name } => diag.with_suggestion(format!(
                "give it a value (`const {name} = ...;`) or declare it with `let`"
            )),
            ParseErrorKind::ExpectedPropertyName { .. } => {
                diag.with_suggestion("use a computed access such as `object[\"key\"]`")
            }
            ParseErrorKind::NestingTooDeep { .. } => diag.with_suggestion(
                "raise the limit with `--max-nesting-depth` or split the expression",
            ),
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests;
