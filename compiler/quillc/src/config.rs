//! Driver configuration.
//!
//! Built from defaults, then environment variables, then command-line flags;
//! each layer overrides the one before it.

use quill_diagnostic::emitter::ColorMode;
use quill_eval::{Interpreter, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};
use quill_lexer::UnknownCharPolicy;
use quill_parse::DEFAULT_MAX_NESTING_DEPTH;

pub const MAX_CALL_DEPTH_VAR: &str = "QUILL_MAX_CALL_DEPTH";
pub const MAX_NESTING_DEPTH_VAR: &str = "QUILL_MAX_NESTING_DEPTH";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Nested user function calls allowed before `RecursionLimitExceeded`.
    pub max_call_depth: usize,
    /// Syntactic nesting allowed before `NestingTooDeep`.
    pub max_nesting_depth: usize,
    pub color: ColorMode,
    pub unknown_chars: UnknownCharPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            color: ColorMode::Auto,
            unknown_chars: UnknownCharPolicy::Fail,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{setting} expects a non-negative integer, got `{value}`")]
    InvalidNumber { setting: String, value: String },
    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `var`, which looks up an environment variable.
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(value) = var(MAX_CALL_DEPTH_VAR) {
            self.max_call_depth = parse_depth(MAX_CALL_DEPTH_VAR, &value)?;
        }
        if let Some(value) = var(MAX_NESTING_DEPTH_VAR) {
            self.max_nesting_depth = parse_depth(MAX_NESTING_DEPTH_VAR, &value)?;
        }
        Ok(self)
    }

    /// Apply the flags among `args` and return the remaining arguments in
    /// order.
    ///
    /// `--help` and `--version` are passed through as arguments; any other
    /// unrecognized `--` argument is an error.
    pub fn with_args<'a>(
        mut self,
        args: impl IntoIterator<Item = &'a str>,
    ) -> Result<(Self, Vec<&'a str>), ConfigError> {
        let mut rest = Vec::new();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-call-depth=") {
                self.max_call_depth = parse_depth("--max-call-depth", value)?;
            } else if let Some(value) = arg.strip_prefix("--max-nesting-depth=") {
                self.max_nesting_depth = parse_depth("--max-nesting-depth", value)?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                self.color = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidColor(value.to_string()))?;
            } else if arg == "--skip-unknown-chars" {
                self.unknown_chars = UnknownCharPolicy::Skip;
            } else if arg.starts_with("--") && arg != "--help" && arg != "--version" {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            } else {
                rest.push(arg);
            }
        }
        Ok((self, rest))
    }

    /// An interpreter with this call depth, printing to stdout.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::builder()
            .max_call_depth(self.max_call_depth)
            .build()
    }

    /// An interpreter with this call depth, printing to `handler`.
    pub fn interpreter_with(&self, handler: SharedPrintHandler) -> Interpreter {
        Interpreter::builder()
            .max_call_depth(self.max_call_depth)
            .print_handler(handler)
            .build()
    }
}

fn parse_depth(setting: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            setting: setting.to_string(),
            value: value.to_string(),
        })
}
