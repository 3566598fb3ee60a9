//! Source text to tokens, program and value.

use quill_eval::{Interpreter, Value};
use quill_ir::{Program, TokenList};
use quill_parse::Parser;
use tracing::debug;

use crate::{Config, Error};

/// Lex, parse and evaluate `source` with default settings.
///
/// Declarations are made in `interpreter`'s root environment, so successive
/// calls on the same interpreter share bindings.
pub fn evaluate_source(source: &str, interpreter: &mut Interpreter) -> Result<Value, Error> {
    evaluate_source_with(source, interpreter, &Config::default())
}

/// Like [`evaluate_source`], with the lexer and parser settings of `config`.
///
/// The call depth limit is a property of the interpreter; see
/// [`Config::interpreter`].
pub fn evaluate_source_with(
    source: &str,
    interpreter: &mut Interpreter,
    config: &Config,
) -> Result<Value, Error> {
    let program = parse_source(source, config)?;
    let value = interpreter.eval_program(&program)?;
    debug!(result = %value, "evaluated");
    Ok(value)
}

pub fn lex_source(source: &str, config: &Config) -> Result<TokenList, Error> {
    Ok(quill_lexer::lex_with(source, config.unknown_chars)?)
}

pub fn parse_source(source: &str, config: &Config) -> Result<Program, Error> {
    let tokens = lex_source(source, config)?;
    let program = Parser::new(&tokens)
        .with_max_depth(config.max_nesting_depth)
        .parse_program()?;
    Ok(program)
}
