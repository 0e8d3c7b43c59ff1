//! lexor-lex - Lexical Scanner for the Lexor Scripting Language
//!
//! This crate turns Lexor source text into an ordered stream of classified
//! tokens for a parser to consume. It is single-pass with one character of
//! lookahead and never aborts: problems in the input come back as
//! [`TokenKind::Error`] tokens and scanning continues after them.
//!
//! # Example Usage
//!
//! ```
//! use lexor_lex::{Lexer, TokenKind};
//!
//! let source = "DECLARE INT x = 5$\nPRINT: x & \"!\"$";
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().kind, TokenKind::Declare);
//! assert_eq!(lexer.next_token().kind, TokenKind::IntType);
//!
//! // Or iterate; the last item is always EndOfInput
//! let tokens: Vec<_> = Lexer::new(source).collect();
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The scanner itself
//! - [`cursor`] - Character cursor for source traversal
//! - [`keyword`] - Reserved word table
//! - [`chars`] - Character classes and escape decoding
//! - [`config`] - Scanner configuration
//! - [`error`] - Lexical error reasons
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words, matched exactly and case-sensitively:
//!
//! **Blocks**: `SCRIPT`, `AREA`, `START`, `END`
//!
//! **Declarations**: `DECLARE`, `INT`, `CHAR`, `BOOL`, `FLOAT`
//!
//! **I/O**: `PRINT`, `SCAN`
//!
//! **Control Flow**: `IF`, `ELSE`, `FOR`, `REPEAT`, `WHEN`
//!
//! **Logic**: `AND`, `OR`, `NOT`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `123`, `45.67`
//! - **String**: `"hello"`, `"line\n"`
//! - **Character**: `'a'`, `'\''`
//! - **Boolean**: `TRUE`, `FALSE`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `>`, `<`, `>=`, `<=`, `==`, `<>`
//! - **Assignment**: `=`
//! - **Concatenation**: `&`
//!
//! ## Punctuation
//!
//! `(`, `)`, `[`, `]`, `:`, `,` and the statement terminator `$`.
//! Line breaks carry no meaning.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::LexErrorKind;
pub use keyword::{keyword_from_ident, keywords};
pub use lexer::{tokenize, tokenize_with_config, Lexer};
pub use token::{Token, TokenKind};
