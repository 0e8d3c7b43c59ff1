//! Core error types for the lexor-util crate
//!
//! Lexical errors are not here: the scanner reports those as tokens. These
//! types cover the few operations in the toolchain that can genuinely fail.

use thiserror::Error;

/// Error type for span construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// The range ends before it starts
    #[error("Invalid span: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },

    /// Line and column numbers are 1-based
    #[error("Invalid position: line {line}, column {column} (both must be at least 1)")]
    InvalidPosition { line: u32, column: u32 },
}

/// Error type for loading or saving configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// A field holds a value outside its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
