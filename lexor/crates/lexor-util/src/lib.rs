//! lexor-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the Lexor toolchain crates. Nothing in here
//! knows about the Lexor language itself; the scanner and any later phase
//! build on these pieces.
//!
//! # Module Structure
//!
//! - [`span`] - Source locations (byte range plus line/column)
//! - [`diagnostic`] - Diagnostics, diagnostic codes and the collecting [`Handler`]
//! - [`error`] - Error types for the utility layer
//!
//! # Example
//!
//! ```
//! use lexor_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unknown character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNKNOWN_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

mod edge_cases;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{ConfigError, ConfigResult, SpanError, SpanResult};
pub use span::Span;
