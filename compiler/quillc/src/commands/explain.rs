//! The `explain` command: documentation for an error code.

use quill_diagnostic::{ErrorCode, ErrorDocs};

pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes look like E0001 (lexer), E1001 (parser) or E2001 (evaluator).");
        std::process::exit(1);
    };
    println!("{}", ErrorDocs::get(code));
}
