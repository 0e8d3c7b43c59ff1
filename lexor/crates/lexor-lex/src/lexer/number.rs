//! Number literal lexing.
//!
//! A number is a run of ASCII digits, optionally followed by `.` and at
//! least one more digit. A `.` that is not followed by a digit ends the
//! number and is left for the next token.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `123`
    /// - Decimal: `45.67`
    ///
    /// A second fractional part (`1.2.3`) makes the whole run of digits and
    /// points a `MalformedNumber` error; scanning resumes at the first
    /// character that is neither.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.eat_digits();

        if self.at_fraction() {
            self.cursor.advance();
            self.eat_digits();

            if self.at_fraction() {
                while self.cursor.peek() == '.' || self.cursor.peek().is_ascii_digit() {
                    self.cursor.advance();
                }
                return self.error_token(LexErrorKind::MalformedNumber);
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(TokenKind::Number, text)
    }

    fn eat_digits(&mut self) {
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }
    }

    /// A `.` followed by a digit.
    fn at_fraction(&self) -> bool {
        self.cursor.peek() == '.' && self.cursor.peek_next().is_ascii_digit()
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
    fn test_integer() {
        let tokens = lex_all("123");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "123");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        assert_eq!(lex_all("0")[0].text, "0");
        assert_eq!(lex_all("007")[0].text, "007");
    }

    #[test]
    fn test_decimal() {
        let tokens = lex_all("45.67");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "45.67");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_trailing_dot_not_consumed() {
        let tokens = lex_all("45.");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "45");
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].text, ".");
        assert_eq!(tokens[1].error, Some(LexErrorKind::UnknownCharacter('.')));
        assert_eq!(tokens[1].column(), 3);
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let tokens = lex_all(".5");
        assert_eq!(tokens[0].error, Some(LexErrorKind::UnknownCharacter('.')));
        assert_eq!(tokens[1].text, "5");
    }

    #[test]
    fn test_two_decimal_points() {
        let tokens = lex_all("1.2.3$");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].text, "1.2.3");
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedNumber));
        assert_eq!(tokens[0].span.len(), 5);
        assert_eq!(tokens[1].kind, TokenKind::StatementEnd);
    }

    #[test]
    fn test_malformed_run_swallows_every_point() {
        let tokens = lex_all("1.2.3.4. x");
        assert_eq!(tokens[0].text, "1.2.3.4.");
        assert_eq!(tokens[0].error, Some(LexErrorKind::MalformedNumber));
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_decimal_then_lone_dot() {
        let tokens = lex_all("1.2.");
        assert_eq!(tokens[0].text, "1.2");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].error, Some(LexErrorKind::UnknownCharacter('.')));
    }

    #[test]
    fn test_double_dot() {
        let kinds: Vec<TokenKind> = lex_all("1..2").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Number,
                TokenKind::Error,
                TokenKind::Error,
                TokenKind::Number,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_number_then_identifier() {
        let tokens = lex_all("12abc");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "abc");
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        let tokens = lex_all("-5");
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].text, "5");
    }
}
