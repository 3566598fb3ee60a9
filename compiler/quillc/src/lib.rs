//! Quill driver: the pipeline from source text to a value, plus the
//! commands behind the `quill` binary.
//!
//! ```text
//! source ──► quill_lexer::lex_with ──► TokenList
//!                                         │
//!            quill_parse::Parser ◄────────┘
//!                  │
//!                  ▼
//!               Program ──► Interpreter::eval_program ──► Value
//! ```
//!
//! Each phase has its own error type; [`Error`] unifies them so front ends
//! can render any failure as a diagnostic.

pub mod commands;
mod config;
mod error;
mod pipeline;
mod tracing_setup;

pub use config::{Config, ConfigError, MAX_CALL_DEPTH_VAR, MAX_NESTING_DEPTH_VAR};
pub use error::Error;
pub use pipeline::{evaluate_source, evaluate_source_with, lex_source, parse_source};
pub use tracing_setup::init_tracing;
