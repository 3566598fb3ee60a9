//! Human-readable diagnostic output with optional ANSI color.
//!
//! With source text attached, each label is rendered against the line it
//! points into:
//!
//! ```text
//! error[E2001]: undefined variable `y`
//!  --> main.quill:1:9
//!   |
//! 1 | let x = y + 1;
//!   |         ^ not found in this scope
//!   = note: variables must be declared before they are used
//! ```
//!
//! Without source text, labels fall back to raw byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// Whether to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` decides coloring under [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels against `text`, reporting locations as `path:line:col`.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_labels_with_source(&mut self, labels: &[Label]) {
        let Some(source) = self.source.take() else {
            return;
        };
        let located: Vec<(usize, usize, &Label)> = labels
            .iter()
            .map(|label| {
                let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
                (line, col, label)
            })
            .collect();
        let gutter = located
            .iter()
            .map(|(line, _, _)| line.to_string().len())
            .max()
            .unwrap_or(1);
        let pad = " ".repeat(gutter);

        if let Some((line, col, _)) = located.iter().find(|(_, _, l)| l.is_primary()) {
            let _ = write!(self.writer, "{pad}");
            self.write_colored("-->", colors::SECONDARY);
            let _ = writeln!(self.writer, " {}:{line}:{col}", source.path);
        }
        self.write_gutter(&pad);

        for (line, col, label) in located {
            let text = source.lines.line_text(&source.text, line);
            let _ = write!(self.writer, "{line:>gutter$} ");
            self.write_colored("|", colors::SECONDARY);
            let _ = writeln!(self.writer, " {text}");

            let remaining = text.chars().count().saturating_sub(col - 1);
            let span_chars = source
                .text
                .get(label.span.to_range())
                .map_or(1, |s| s.chars().count());
            let width = span_chars.clamp(1, remaining.max(1));
            let (marker, color) = if label.is_primary() {
                ("^", colors::ERROR)
            } else {
                ("-", colors::SECONDARY)
            };
            let _ = write!(self.writer, "{pad} ");
            self.write_colored("|", colors::SECONDARY);
            let _ = write!(self.writer, " {}", " ".repeat(col - 1));
            self.write_colored(&format!("{} {}", marker.repeat(width), label.message), color);
            let _ = writeln!(self.writer);
        }

        self.source = Some(source);
    }

    fn write_labels_without_source(&mut self, labels: &[Label]) {
        for label in labels {
            let marker = if label.is_primary() { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            let color = if label.is_primary() {
                colors::ERROR
            } else {
                colors::SECONDARY
            };
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
        }
    }

    fn write_gutter(&mut self, pad: &str) {
        let _ = write!(self.writer, "{pad} ");
        self.write_colored("|", colors::SECONDARY);
        let _ = writeln!(self.writer);
    }

    fn gutter_pad(&self, labels: &[Label]) -> String {
        let Some(source) = &self.source else {
            return "  ".to_string();
        };
        let width = labels
            .iter()
            .map(|l| source.lines.line_from_offset(l.span.start).to_string().len())
            .max()
            .unwrap_or(1);
        " ".repeat(width)
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter writing to stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        if self.source.is_some() && !diagnostic.labels.is_empty() {
            self.write_labels_with_source(&diagnostic.labels);
        } else {
            self.write_labels_without_source(&diagnostic.labels);
        }

        let pad = self.gutter_pad(&diagnostic.labels);
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{pad} = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "{pad} = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
