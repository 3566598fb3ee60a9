//! Recursive-descent parser for Quill.
//!
//! Consumes a [`TokenList`] and produces a [`Program`], or the first
//! [`ParseError`]. There is no recovery: a single error aborts the parse
//! and no partial tree is returned.
//!
//! Precedence, lowest first:
//!
//! | Level          | Forms                          | Associativity |
//! |----------------|--------------------------------|---------------|
//! | assignment     | `a = b`                        | right         |
//! | object         | `{ k: v, shorthand }`          |               |
//! | additive       | `+ - < >`                      | left          |
//! | multiplicative | `* / %`                        | left          |
//! | postfix        | `f(args)`, `o.name`, `o[expr]` | left          |
//! | primary        | identifier, number, string, `( e )` |          |

mod cursor;
mod error;
mod grammar;

use quill_ir::{Program, TokenList};
use quill_stack::ensure_sufficient_stack;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

/// Nesting depth allowed when none is configured.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            depth: 0,
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Limit how deeply expressions and function bodies may nest.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(self.parse_statement()?);
        }
        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::nesting_too_deep(
                self.max_depth,
                self.cursor.current_span(),
            ));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Run a left-associative loop in which every step calls
    /// [`deepen`](Self::deepen). The depth the steps add is released when
    /// the loop ends.
    fn folding<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        let result = f(self);
        self.depth = depth;
        result
    }

    /// Account for one more level of tree depth built by a loop rather
    /// than by recursion: a binary fold or a postfix step.
    fn deepen(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::nesting_too_deep(
                self.max_depth,
                self.cursor.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Tag errors from `f` with the construct being parsed.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|e| e.with_context(context))
    }
}

/// Parse a token list with the default nesting limit.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
