//! Operator and punctuation lexing.
//!
//! Only `<`, `>` and `=` can start a two-character operator. Each of them
//! looks at exactly one more character.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character operator or punctuation mark.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.operator_token(kind)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.operator_token(TokenKind::GreaterEq)
        } else {
            self.operator_token(TokenKind::Greater)
        }
    }

    /// Lexes less, less-equals or not-equal.
    ///
    /// Handles: `<`, `<=`, `<>`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.operator_token(TokenKind::LessEq)
        } else if self.cursor.match_char('>') {
            self.operator_token(TokenKind::NotEqual)
        } else {
            self.operator_token(TokenKind::Less)
        }
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.operator_token(TokenKind::Equal)
        } else {
            self.operator_token(TokenKind::Assign)
        }
    }

    fn operator_token(&mut self, kind: TokenKind) -> Token {
        self.make_token(kind, kind.symbol().unwrap_or_default())
    }
}
