//! Lexical error reasons.
//!
//! The scanner never fails as a whole. Each problem becomes a
//! [`TokenKind::Error`](crate::TokenKind::Error) token whose
//! [`Token::error`](crate::Token::error) field holds one of these reasons.

use lexor_util::DiagnosticCode;
use thiserror::Error;

/// Why a lexeme could not be classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A `"` without a closing `"` on the same line.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `'` without a closing `'` on the same line.
    #[error("unterminated character literal")]
    UnterminatedCharLiteral,

    /// A character literal holding zero or more than one character.
    #[error("character literal must hold exactly one character, found {chars}")]
    MalformedCharLiteral {
        /// Number of characters between the quotes.
        chars: usize,
    },

    /// A numeral with more than one decimal point.
    #[error("malformed number literal: more than one decimal point")]
    MalformedNumber,

    /// A character that starts no token.
    #[error("unknown character {0:?}")]
    UnknownCharacter(char),
}

impl LexErrorKind {
    /// The diagnostic code reported for this error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnknownCharacter(_) => DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::MalformedNumber => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexErrorKind::UnterminatedCharLiteral => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexErrorKind::MalformedCharLiteral { .. } => DiagnosticCode::E_LEXER_MALFORMED_CHAR,
        }
    }

    /// A short repair hint, where one is obvious.
    pub fn help(self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => {
                Some("close the string with `\"` before the end of the line")
            },
            LexErrorKind::UnterminatedCharLiteral => {
                Some("close the character literal with `'` before the end of the line")
            },
            LexErrorKind::MalformedCharLiteral { chars: 0 } => {
                Some("a character literal needs one character, e.g. 'a'")
            },
            LexErrorKind::MalformedCharLiteral { .. } => {
                Some("use double quotes for text longer than one character")
            },
            LexErrorKind::MalformedNumber | LexErrorKind::UnknownCharacter(_) => None,
        }
    }
}
