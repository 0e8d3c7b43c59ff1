//! Token definitions for the Lexor scripting language.
//!
//! A [`Token`] is a plain owned value: kind, text, and the [`Span`] of its
//! lexeme. Tokens never point back into the scanner, so a parser can keep
//! them, clone them, or ship them to another thread.

use std::fmt;

use lexor_util::Span;

use crate::error::LexErrorKind;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Block / structure keywords =====
    /// `SCRIPT`
    Script,
    /// `AREA`
    Area,
    /// `START`
    Start,
    /// `END`
    End,

    // ===== Declaration / type keywords =====
    /// `DECLARE`
    Declare,
    /// `INT`
    IntType,
    /// `CHAR`
    CharType,
    /// `BOOL`
    BoolType,
    /// `FLOAT`
    FloatType,

    // ===== I/O keywords =====
    /// `PRINT`
    Print,
    /// `SCAN`
    Scan,

    // ===== Control-flow keywords =====
    /// `IF`
    If,
    /// `ELSE`
    Else,
    /// `FOR`
    For,
    /// `REPEAT`
    Repeat,
    /// `WHEN`
    When,

    // ===== Logical keywords =====
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,

    // ===== Literals =====
    /// Integer or decimal literal: `123`, `45.67`
    Number,
    /// Double-quoted string literal (text holds the decoded content)
    String,
    /// Single-quoted character literal (text holds the decoded character)
    CharLiteral,
    /// `TRUE`
    True,
    /// `FALSE`
    False,

    /// Any identifier-shaped lexeme that is not reserved
    Identifier,

    // ===== Operators / punctuation =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
    /// `==`
    Equal,
    /// `<>`
    NotEqual,
    /// `=`
    Assign,
    /// `&`
    Concat,
    /// `$`
    StatementEnd,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // ===== Sentinels =====
    /// End of input; produced exactly once per scan
    EndOfInput,
    /// A lexical error; the token carries the reason
    Error,
}

impl TokenKind {
    /// Returns true for reserved words other than `TRUE`/`FALSE`.
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Script
                | Area
                | Start
                | End
                | Declare
                | IntType
                | CharType
                | BoolType
                | FloatType
                | Print
                | Scan
                | If
                | Else
                | For
                | Repeat
                | When
                | And
                | Or
                | Not
        )
    }

    /// Returns true for literal kinds, including the boolean literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::CharLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Returns true for operators and punctuation.
    pub fn is_operator(self) -> bool {
        self.symbol().is_some()
    }

    /// The canonical spelling of an operator or punctuation kind.
    ///
    /// ```
    /// use lexor_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::NotEqual.symbol(), Some("<>"));
    /// assert_eq!(TokenKind::Identifier.symbol(), None);
    /// ```
    pub fn symbol(self) -> Option<&'static str> {
        use TokenKind::*;
        let symbol = match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
            Greater => ">",
            Less => "<",
            GreaterEq => ">=",
            LessEq => "<=",
            Equal => "==",
            NotEqual => "<>",
            Assign => "=",
            Concat => "&",
            StatementEnd => "$",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            Colon => ":",
            Comma => ",",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "'{}'", symbol);
        }
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::True | TokenKind::False => "boolean literal",
            TokenKind::Identifier => "identifier",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Error => "error",
            keyword => return write!(f, "keyword {:?}", keyword),
        };
        f.write_str(name)
    }
}

/// A classified lexeme with its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexeme is.
    pub kind: TokenKind,

    /// The lexeme text.
    ///
    /// Operators carry their canonical symbol, keywords and identifiers the
    /// exact source spelling, string and character literals their decoded
    /// content, error tokens the offending source text, and
    /// [`TokenKind::EndOfInput`] the empty string.
    pub text: String,

    /// Byte range of the raw lexeme plus the line/column of its first
    /// character.
    pub span: Span,

    /// Why this is an error token; `None` for every other kind.
    pub error: Option<LexErrorKind>,
}

impl Token {
    /// Creates a non-error token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            error: None,
        }
    }

    /// Creates an error token carrying its reason.
    pub fn error(reason: LexErrorKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Error,
            text: text.into(),
            span,
            error: Some(reason),
        }
    }

    /// Line of the first character (1-based unless configured otherwise).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for [`TokenKind::Error`].
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Returns true for [`TokenKind::EndOfInput`].
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.error) {
            (TokenKind::EndOfInput, _) => write!(f, "end of input at {}", self.span),
            (TokenKind::Error, Some(reason)) => {
                write!(f, "error {:?} at {}: {}", self.text, self.span, reason)
            },
            (kind, _) => write!(f, "{:?} {:?} at {}", kind, self.text, self.span),
        }
    }
}
