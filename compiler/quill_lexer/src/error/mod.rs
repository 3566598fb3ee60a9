//! Lexer errors.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unrecognized character `{}`", .ch.escape_debug())]
    UnrecognizedChar { ch: char },
}

impl LexError {
    pub fn unrecognized_char(ch: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnrecognizedChar { ch },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedChar { .. } => ErrorCode::E0001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, "not part of the language");
        match self.kind {
            LexErrorKind::UnrecognizedChar { ch } if ch == '_' || ch.is_alphanumeric() => diag
                .with_note("identifiers may only contain letters with upper- and lower-case forms"),
            LexErrorKind::UnrecognizedChar { .. } => diag,
        }
    }
}
