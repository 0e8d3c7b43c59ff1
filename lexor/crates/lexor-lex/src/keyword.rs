//! Reserved word table.
//!
//! The table is built once per process and shared read-only. Lookups are
//! exact and case-sensitive: `IF` is a keyword, `If` and `if` are
//! identifiers.

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved spelling paired with its kind.
const RESERVED: &[(&str, TokenKind)] = &[
    ("SCRIPT", TokenKind::Script),
    ("AREA", TokenKind::Area),
    ("START", TokenKind::Start),
    ("END", TokenKind::End),
    ("DECLARE", TokenKind::Declare),
    ("INT", TokenKind::IntType),
    ("CHAR", TokenKind::CharType),
    ("BOOL", TokenKind::BoolType),
    ("FLOAT", TokenKind::FloatType),
    ("PRINT", TokenKind::Print),
    ("SCAN", TokenKind::Scan),
    ("IF", TokenKind::If),
    ("ELSE", TokenKind::Else),
    ("FOR", TokenKind::For),
    ("REPEAT", TokenKind::Repeat),
    ("WHEN", TokenKind::When),
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("NOT", TokenKind::Not),
    ("TRUE", TokenKind::True),
    ("FALSE", TokenKind::False),
];

lazy_static::lazy_static! {
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> =
        RESERVED.iter().copied().collect();
}

/// Looks up an identifier-shaped lexeme in the reserved word table.
///
/// ```
/// use lexor_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("REPEAT"), Some(TokenKind::Repeat));
/// assert_eq!(keyword_from_ident("TRUE"), Some(TokenKind::True));
/// assert_eq!(keyword_from_ident("repeat"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Iterates over all reserved spellings and their kinds, in table order.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    RESERVED.iter().copied()
}
