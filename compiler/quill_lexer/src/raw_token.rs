//! Raw token definition.
//!
//! `RawToken` is the logos-level classification. Conversion into
//! `quill_ir::Token` (keyword detection, string content extraction) happens
//! in the crate root.

use logos::{Lexer, Logos};
use quill_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    /// Opening quote, raw content, and the closing quote if there is one.
    #[regex(r#""[^"]*"?"#)]
    String,

    #[regex(r"[=,.:;(){}\[\]+\-*/%<>]", punctuation)]
    Punct(TokenKind),

    /// A run of cased letters, keywords included.
    ///
    /// The regex only matches the first character; [`word`] decides whether
    /// it is a letter and extends the match over the rest of the run.
    #[regex(r"[A-Za-z]|[^\x00-\x7F]", word)]
    Word,
}

/// A character is a letter when it has distinct upper- and lower-case forms.
///
/// This accepts accented and non-Latin cased letters (`é`, `Ж`) and rejects
/// digits, `_`, and scripts without case.
pub(crate) fn is_letter(c: char) -> bool {
    !c.to_uppercase().eq(c.to_lowercase())
}

fn punctuation(lex: &mut Lexer<'_, RawToken>) -> Option<TokenKind> {
    lex.slice().chars().next().and_then(TokenKind::punctuation)
}

fn word(lex: &mut Lexer<'_, RawToken>) -> bool {
    let Some(first) = lex.slice().chars().next() else {
        return false;
    };
    if !is_letter(first) {
        return false;
    }
    let rest: usize = lex
        .remainder()
        .chars()
        .take_while(|c| is_letter(*c))
        .map(char::len_utf8)
        .sum();
    lex.bump(rest);
    true
}
