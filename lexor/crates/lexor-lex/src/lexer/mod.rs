//! Lexer module.
//!
//! The scanner is split by recognition rule:
//! - `core` - Lexer struct, dispatch and token materialization
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;

use crate::config::LexerConfig;
use crate::token::Token;

/// Scans `source` to completion with the default configuration.
///
/// The returned vector always ends with exactly one `EndOfInput` token.
///
/// ```
/// use lexor_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x >= 1$");
/// assert_eq!(tokens[1].kind, TokenKind::GreaterEq);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Scans `source` to completion with an explicit configuration.
pub fn tokenize_with_config(source: &str, config: LexerConfig) -> Vec<Token> {
    Lexer::with_config(source, config).collect()
}
