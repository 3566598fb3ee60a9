//! Lexer for Quill.
//!
//! Turns source text into a [`TokenList`] in a single left-to-right pass:
//!
//! - whitespace (space, tab, `\r`, `\n`) separates tokens and is dropped
//! - `= , . : ; ( ) { } [ ] + - * / % < >` are one token each
//! - `"` starts a string literal whose raw content runs to the next `"`;
//!   an unterminated string runs to the end of input
//! - a run of ASCII digits is a `Number`
//! - a run of cased letters is `let`, `const`, `function`, or an `Identifier`
//!
//! Any other character is an error under [`UnknownCharPolicy::Fail`] (the
//! default) or dropped with a warning under [`UnknownCharPolicy::Skip`].

mod error;
mod raw_token;

use logos::Logos;
use quill_ir::{Span, Token, TokenKind, TokenList};

pub use error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// What to do with a character that starts no token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownCharPolicy {
    /// Stop with [`LexErrorKind::UnrecognizedChar`].
    #[default]
    Fail,
    /// Drop the character and keep going.
    Skip,
}

/// Lex `source`, failing on the first unrecognized character.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with(source, UnknownCharPolicy::Fail)
}

/// Lex `source` with an explicit policy for unrecognized characters.
pub fn lex_with(source: &str, policy: UnknownCharPolicy) -> Result<TokenList, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        match result {
            Ok(raw) => tokens.push(convert(raw, slice, span)),
            Err(()) => {
                let ch = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                match policy {
                    UnknownCharPolicy::Fail => return Err(LexError::unrecognized_char(ch, span)),
                    UnknownCharPolicy::Skip => {
                        tracing::warn!(?ch, %span, "skipping unrecognized character");
                    }
                }
            }
        }
    }

    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
    Ok(TokenList::new(tokens, Span::from_range(0..source.len()).end))
}

fn convert(raw: RawToken, slice: &str, span: Span) -> Token {
    match raw {
        RawToken::Number => Token::new(TokenKind::Number, slice, span),
        RawToken::String => {
            let body = slice.strip_prefix('"').unwrap_or(slice);
            let content = match body.strip_suffix('"') {
                Some(content) => content,
                None => {
                    tracing::warn!(%span, "unterminated string literal runs to end of input");
                    body
                }
            };
            Token::new(TokenKind::String, content, span)
        }
        RawToken::Punct(kind) => Token::new(kind, slice, span),
        RawToken::Word => {
            let kind = TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier);
            Token::new(kind, slice, span)
        }
    }
}
