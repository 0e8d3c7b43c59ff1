//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::keyword::keyword_from_ident;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Collects the maximal run of letters, digits and underscores, then
    /// consults the keyword table. Only an exact match produces a keyword
    /// kind; everything else is an `Identifier`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, text)
    }
}
