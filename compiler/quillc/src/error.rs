//! Unified pipeline error.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_eval::EvalError;
use quill_lexer::LexError;
use quill_parse::ParseError;

/// Any failure of [`evaluate_source`](crate::evaluate_source).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(err) => err.code(),
            Error::Parse(err) => err.code(),
            Error::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.to_diagnostic(),
            Error::Parse(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }
}
