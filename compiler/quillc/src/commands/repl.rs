//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use quill_eval::Interpreter;

use super::report_error;
use crate::{evaluate_source_with, Config, Error};

pub const PROMPT: &str = "> ";

/// Why the loop stopped early.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// A line failed to lex, parse or evaluate. Carries the line for
    /// rendering the diagnostic.
    #[error("{error}")]
    Eval { error: Error, line: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run the REPL on stdin and stdout; exits with status 1 on the first error.
pub fn run_repl(config: &Config) {
    let mut interpreter = config.interpreter();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match repl_loop(stdin.lock(), &mut stdout, &mut interpreter, config) {
        Ok(()) => {}
        Err(ReplError::Eval { error, line }) => {
            report_error(&error, "<repl>", &line, config);
            std::process::exit(1);
        }
        Err(ReplError::Io(e)) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Read lines from `input` and evaluate each against `interpreter`, writing
/// the prompt and each result to `output`.
///
/// Stops at end of input, on an empty line, or on a line containing `exit`.
/// Bindings persist from line to line. The first error ends the loop.
pub fn repl_loop<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    interpreter: &mut Interpreter,
    config: &Config,
) -> Result<(), ReplError> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.is_empty() || source.contains("exit") {
            return Ok(());
        }

        match evaluate_source_with(source, interpreter, config) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => {
                return Err(ReplError::Eval {
                    error,
                    line: source.to_string(),
                })
            }
        }
    }
}
