//! The `run` command: evaluate a source file once.

use super::{read_file, report_error};
use crate::{evaluate_source_with, Config};

/// Evaluate the file at `path` and print its result unless it is `null`.
///
/// Exits with status 1 after reporting the first error.
pub fn run_file(path: &str, config: &Config) {
    let source = read_file(path);
    let mut interpreter = config.interpreter();
    match evaluate_source_with(&source, &mut interpreter, config) {
        Ok(value) if value.is_null() => {}
        Ok(value) => println!("{value}"),
        Err(err) => {
            report_error(&err, path, &source, config);
            std::process::exit(1);
        }
    }
}
