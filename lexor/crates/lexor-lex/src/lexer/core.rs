//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-token dispatch and the
//! helpers every recognition rule uses to materialize its token.

use std::iter::FusedIterator;

use lexor_util::{DiagnosticBuilder, Handler, Span};

use crate::chars::{is_ident_start, is_whitespace, BOM};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};

/// Lexer for the Lexor scripting language.
///
/// A lexer is one scan session over one borrowed source buffer. It hands out
/// tokens on demand, either through [`Lexer::next_token`] or as an
/// [`Iterator`]. Errors never stop the scan; they come back as
/// [`TokenKind::Error`] tokens and, when a [`Handler`] is attached, as
/// diagnostics.
///
/// # Example
///
/// ```
/// use lexor_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("PRINT: x$").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Print,
///         TokenKind::Colon,
///         TokenKind::Identifier,
///         TokenKind::StatementEnd,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Optional sink for lexical error diagnostics.
    handler: Option<&'a Handler>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts.
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the leading byte-order mark has been checked.
    bom_checked: bool,

    /// Whether `EndOfInput` has been produced.
    finished: bool,

    /// Tokens produced so far, `EndOfInput` counted once.
    tokens_emitted: usize,

    /// Error tokens produced so far.
    error_count: usize,

    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a new lexer with an explicit configuration.
    ///
    /// A start line of 0 is treated as 1.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        let start_line = config.start_line.max(1);
        tracing::debug!(len = source.len(), start_line, "starting scan");

        Self {
            cursor: Cursor::with_start_line(source, start_line),
            handler: None,
            token_start: 0,
            token_start_line: start_line,
            token_start_column: 1,
            bom_checked: false,
            finished: false,
            tokens_emitted: 0,
            error_count: 0,
            config,
        }
    }

    /// Attaches a handler that receives a diagnostic for every error token.
    ///
    /// ```
    /// use lexor_lex::Lexer;
    /// use lexor_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let tokens: Vec<_> = Lexer::new("x @ y").with_handler(&handler).collect();
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn with_handler(mut self, handler: &'a Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and line breaks, then dispatches on the current
    /// character. Once the source is exhausted every call returns an
    /// `EndOfInput` token at the same position.
    pub fn next_token(&mut self) -> Token {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.config.skip_bom && self.cursor.peek() == BOM {
                self.cursor.skip_invisible();
            }
        }

        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.end_of_input();
        }

        match self.cursor.peek() {
            '$' => self.lex_single(TokenKind::StatementEnd),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Multiply),
            '/' => self.lex_single(TokenKind::Divide),
            '%' => self.lex_single(TokenKind::Modulo),
            '&' => self.lex_single(TokenKind::Concat),
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            '[' => self.lex_single(TokenKind::LBracket),
            ']' => self.lex_single(TokenKind::RBracket),
            ':' => self.lex_single(TokenKind::Colon),
            ',' => self.lex_single(TokenKind::Comma),
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            '=' => self.lex_equals(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.error_token(LexErrorKind::UnknownCharacter(c))
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && is_whitespace(self.cursor.peek()) {
            self.cursor.advance();
        }
    }

    fn end_of_input(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            self.tokens_emitted += 1;
            tracing::debug!(
                tokens = self.tokens_emitted,
                errors = self.error_count,
                "scan finished"
            );
        }
        Token::new(TokenKind::EndOfInput, "", self.token_span())
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// True when the cursor sits on a line terminator or at the end of the
    /// source. Literals cannot extend past this point.
    pub(crate) fn at_line_end(&self) -> bool {
        match self.cursor.peek() {
            _ if self.cursor.is_at_end() => true,
            '\n' => true,
            '\r' => self.cursor.peek_next() == '\n',
            _ => false,
        }
    }

    /// Finishes the current lexeme as a token of `kind`.
    pub(crate) fn make_token(&mut self, kind: TokenKind, text: impl Into<String>) -> Token {
        let token = Token::new(kind, text, self.token_span());
        self.tokens_emitted += 1;
        tracing::trace!(kind = ?token.kind, text = %token.text, at = %token.span, "token");
        token
    }

    /// Finishes the current lexeme as an error token and reports it.
    ///
    /// The token text is the raw source of the lexeme.
    pub(crate) fn error_token(&mut self, reason: LexErrorKind) -> Token {
        let span = self.token_span();
        let text = self.cursor.slice_from(self.token_start);
        self.tokens_emitted += 1;
        self.error_count += 1;

        tracing::debug!(
            error = %reason,
            line = span.line,
            column = span.column,
            text,
            "lexical error"
        );

        if let Some(handler) = self.handler {
            let mut diagnostic = DiagnosticBuilder::error(reason.to_string())
                .code(reason.code())
                .span(span);
            if let Some(help) = reason.help() {
                diagnostic = diagnostic.help(help);
            }
            diagnostic.emit(handler);
        }

        Token::error(reason, text, span)
    }

    /// Returns the current line number.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of tokens produced so far, `EndOfInput` counted once.
    pub fn tokens_emitted(&self) -> usize {
        self.tokens_emitted
    }

    /// Number of error tokens produced so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns true once `EndOfInput` has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// The source buffer being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token including the final `EndOfInput`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_> {}
