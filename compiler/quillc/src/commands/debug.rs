//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::{read_file, report_error};
use crate::{lex_source, parse_source, Config};

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str, config: &Config) {
    let source = read_file(path);
    match lex_source(&source, config) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                println!("  {token:?}");
            }
        }
        Err(err) => {
            report_error(&err, path, &source, config);
            std::process::exit(1);
        }
    }
}

/// Print the statement count and syntax tree of a file.
pub fn parse_file(path: &str, config: &Config) {
    let source = read_file(path);
    match parse_source(&source, config) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.body.len());
            println!();
            println!("{program:#?}");
        }
        Err(err) => {
            report_error(&err, path, &source, config);
            std::process::exit(1);
        }
    }
}
