//! Command handlers for the `quill` binary.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources and reporting errors live here.

use std::io::IsTerminal;

use quill_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::{Config, Error};

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use repl::{repl_loop, run_repl, ReplError, PROMPT};
pub use run::run_file;

/// Render `error` to stderr with a snippet of `source`.
pub fn report_error(error: &Error, path: &str, source: &str, config: &Config) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(config.color, is_tty).with_source(path, source);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
}

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => format!("'{path}' is not valid UTF-8"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
