//! String and character literal lexing.
//!
//! Neither literal may span lines. The token text holds the decoded
//! content; the span still covers the raw lexeme including both quotes.

use crate::chars::unescape;
use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Reads up to the next unescaped `"`. Reaching a line terminator or the
    /// end of the source first yields an `UnterminatedString` error covering
    /// the text scanned so far; the line terminator itself is not consumed.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.at_line_end() {
                return self.error_token(LexErrorKind::UnterminatedString);
            }

            match self.cursor.advance() {
                '"' => break,
                '\\' => self.read_escape(&mut content),
                c => content.push(c),
            }
        }

        self.make_token(TokenKind::String, content)
    }

    /// Lexes a character literal.
    ///
    /// The literal must hold exactly one character, which may be an escape
    /// sequence. Any other count up to a closing `'` is a
    /// `MalformedCharLiteral`. A literal that is not closed before a line
    /// terminator, the end of the source or a `$` is an
    /// `UnterminatedCharLiteral`; the `$` is left for the next token.
    pub(crate) fn lex_char(&mut self) -> Token {
        self.cursor.advance();

        if self.at_line_end() || (self.cursor.peek() == '$' && self.cursor.peek_next() != '\'') {
            return self.error_token(LexErrorKind::UnterminatedCharLiteral);
        }

        let mut content = String::new();
        match self.cursor.advance() {
            '\'' => return self.error_token(LexErrorKind::MalformedCharLiteral { chars: 0 }),
            '\\' => self.read_escape(&mut content),
            c => content.push(c),
        }

        let mut extra = 0;
        while !self.at_line_end() && !matches!(self.cursor.peek(), '\'' | '$') {
            if self.cursor.advance() == '\\' && !self.at_line_end() {
                self.cursor.advance();
            }
            extra += 1;
        }

        if !self.cursor.match_char('\'') {
            return self.error_token(LexErrorKind::UnterminatedCharLiteral);
        }

        let chars = content.chars().count() + extra;
        if chars != 1 {
            return self.error_token(LexErrorKind::MalformedCharLiteral { chars });
        }

        self.make_token(TokenKind::CharLiteral, content)
    }

    /// Decodes the escape after a consumed backslash into `content`.
    ///
    /// Unknown escapes are kept verbatim. A backslash at the end of a line
    /// adds nothing; the caller then reports the literal as unterminated.
    fn read_escape(&mut self, content: &mut String) {
        if self.at_line_end() {
            return;
        }

        let c = self.cursor.advance();
        match unescape(c) {
            Some(decoded) => content.push(decoded),
            None => {
                content.push('\\');
                content.push(c);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_simple_string() {
        let tokens = lex_all("\"hello world\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "hello world");
        assert_eq!(tokens[0].span.len(), 13);
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_empty_string() {
        let tokens = lex_all("\"\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "");
        assert_eq!(tokens[0].span.len(), 2);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex_all(r#""say \"hi\"\n\tback\\slash""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "say \"hi\"\n\tback\\slash");
    }

    #[test]
    fn test_unknown_escape_kept() {
        let tokens = lex_all(r#""a\qb""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "a\\qb");
    }

    #[test]
    fn test_string_keeps_operators_and_keywords() {
        let tokens = lex_all("\"IF x >= 1$\"");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "IF x >= 1$");
    }

    #[test]
    fn test_unterminated_string_at_eof() {
        let tokens = lex_all("\"abc");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedString));
        assert_eq!(tokens[0].text, "\"abc");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_unterminated_string_recovers_at_newline() {
        let tokens = lex_all("PRINT: \"abc\nEND");
        assert_eq!(tokens[2].error, Some(LexErrorKind::UnterminatedString));
        assert_eq!(tokens[2].text, "\"abc");
        assert_eq!(tokens[2].column(), 8);
        assert_eq!(tokens[3].kind, TokenKind::End);
        assert_eq!((tokens[3].line(), tokens[3].column()), (2, 1));
    }

    #[test]
    fn test_unterminated_string_stops_before_crlf() {
        let tokens = lex_all("\"abc\r\nx");
        assert_eq!(tokens[0].text, "\"abc");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_escaped_quote_at_end_is_unterminated() {
        let tokens = lex_all(r#""abc\""#);
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedString));
    }

    #[test]
    fn test_backslash_before_newline() {
        let tokens = lex_all("\"abc\\\nx");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedString));
        assert_eq!(tokens[0].text, "\"abc\\");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_position_after_string() {
        let tokens = lex_all("\"ab\" x");
        assert_eq!(tokens[1].column(), 6);
    }

    #[test]
    fn test_char_literal() {
        let tokens = lex_all("'a'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[0].span.len(), 3);
    }

    #[test]
    fn test_char_literal_escapes() {
        assert_eq!(lex_all(r"'\n'")[0].text, "\n");
        assert_eq!(lex_all(r"'\''")[0].text, "'");
        assert_eq!(lex_all(r"'\\'")[0].text, "\\");
        assert_eq!(lex_all(r"'\t'")[0].kind, TokenKind::CharLiteral);
    }

    #[test]
    fn test_char_literal_non_ascii() {
        let tokens = lex_all("'é'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].text, "é");
    }

    #[test]
    fn test_empty_char_literal() {
        let tokens = lex_all("''");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedCharLiteral { chars: 0 }));
        assert_eq!(tokens[0].text, "''");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_multi_char_literal() {
        let tokens = lex_all("'ab' x");
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedCharLiteral { chars: 2 }));
        assert_eq!(tokens[0].text, "'ab'");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_unknown_escape_in_char_literal_is_malformed() {
        let tokens = lex_all(r"'\q'");
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedCharLiteral { chars: 2 }));
    }

    #[test]
    fn test_unterminated_char_literal() {
        let tokens = lex_all("'a\nEND");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedCharLiteral));
        assert_eq!(tokens[0].text, "'a");
        assert_eq!(tokens[1].kind, TokenKind::End);

        let tokens = lex_all("'");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedCharLiteral));
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_unterminated_char_literal_keeps_terminators() {
        let tokens = lex_all("'a$ x$");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedCharLiteral));
        assert_eq!(tokens[0].text, "'a");
        let kinds: Vec<TokenKind> = tokens[1..].iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::StatementEnd,
                TokenKind::Identifier,
                TokenKind::StatementEnd,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unterminated_char_literal_in_statement() {
        let tokens = lex_all("c = 'a$ PRINT: x$\nEND");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Error,
                TokenKind::StatementEnd,
                TokenKind::Print,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::StatementEnd,
                TokenKind::End,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_quote_before_terminator() {
        let tokens = lex_all("'$ x");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnterminatedCharLiteral));
        assert_eq!(tokens[0].text, "'");
        assert_eq!(tokens[1].kind, TokenKind::StatementEnd);
    }

    #[test]
    fn test_terminator_as_char_literal() {
        let tokens = lex_all("'$'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].text, "$");
    }

    #[test]
    fn test_escaped_quote_inside_malformed_literal() {
        let tokens = lex_all(r"'a\'' x");
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedCharLiteral { chars: 2 }));
        assert_eq!(tokens[0].text, r"'a\''");
        assert_eq!(tokens[1].text, "x");
    }
}
