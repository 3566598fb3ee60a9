//! Diagnostics for the Quill toolchain.
//!
//! Every phase error (lexer, parser, interpreter) converts into a
//! [`Diagnostic`]: a stable [`ErrorCode`], a message, labelled spans and
//! notes. Emitters in [`emitter`] render diagnostics for people;
//! [`ErrorDocs`] backs `quill explain`.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
