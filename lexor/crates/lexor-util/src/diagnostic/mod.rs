//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use lexor_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lexor_util::Span;
//!
//! let source = "PRINT: \"abc";
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(7, 11, 1, 8))
//!     .emit(&handler);
//!
//! let report = handler.diagnostics()[0].render(source);
//! assert!(report.starts_with("error[E1002]: unterminated string literal"));
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use lexor_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error in the input
    Error,
    /// Something suspicious that does not stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic as a human-readable report
    ///
    /// `source` must be the buffer the span points into. The offending line
    /// is printed with a caret underline; the underline is clipped at the
    /// end of that line. A span that does not fit `source` (or
    /// [`Span::DUMMY`]) renders without the snippet.
    ///
    /// ```text
    /// error[E1002]: unterminated string literal
    ///  --> 1:8
    ///   |
    /// 1 | PRINT: "abc
    ///   |        ^^^^
    ///   = help: close the string with `"` before the end of the line
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        let gutter = self.span.line.to_string().len();
        if self.span.line > 0 {
            out.push_str(&format!("{:>w$}--> {}\n", "", self.span, w = gutter));
            if let Some((text, marker)) = self.snippet(source) {
                out.push_str(&format!("{:>w$} |\n", "", w = gutter));
                out.push_str(&format!("{} | {}\n", self.span.line, text));
                out.push_str(&format!("{:>w$} | {}\n", "", marker, w = gutter));
            }
        }

        for note in &self.notes {
            out.push_str(&format!("{:>w$} = note: {}\n", "", note, w = gutter));
        }
        for help in &self.helps {
            out.push_str(&format!("{:>w$} = help: {}\n", "", help, w = gutter));
        }

        out
    }

    /// The source line holding `span.start`, and the caret line under it.
    fn snippet(&self, source: &str) -> Option<(String, String)> {
        let before = source.get(..self.span.start)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        let rest = &source[self.span.start..];
        let line_end = self.span.start + rest.find('\n').unwrap_or(rest.len());
        let text = source[line_start..line_end].trim_end_matches('\r');

        // Tabs are echoed so the caret lines up with the source line.
        let mut marker: String = source[line_start..self.span.start]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        let end = self.span.end.clamp(self.span.start, line_end);
        let width = source
            .get(self.span.start..end)
            .map_or(0, |s| s.chars().count())
            .max(1);
        marker.push_str(&"^".repeat(width));

        Some((text.to_string(), marker))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Interior mutability lets many producers share one handler through `&`.
/// A handler belongs to a single thread; give every concurrent session its
/// own.
///
/// # Examples
///
/// ```
/// use lexor_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unknown character '@'").emit(&handler);
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
