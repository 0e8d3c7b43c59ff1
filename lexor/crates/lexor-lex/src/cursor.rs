//! Character cursor for traversing source code.
//!
//! The cursor only ever moves forward. It tracks the byte offset used for
//! slicing lexemes and the 1-based line/column used for token positions.

/// Sentinel returned by [`Cursor::peek`] and [`Cursor::peek_next`] past the
/// end of the source.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use lexor_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("IF x");
/// assert_eq!(cursor.peek(), 'I');
/// assert_eq!(cursor.peek_next(), 'F');
/// assert_eq!(cursor.advance(), 'I');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self::with_start_line(source, 1)
    }

    /// Creates a new cursor whose first line is numbered `line`.
    pub fn with_start_line(source: &'a str, line: u32) -> Self {
        Self {
            source,
            position: 0,
            line,
            column: 1,
        }
    }

    /// Returns the current character without consuming it, or
    /// [`EOF_CHAR`] at the end of the source.
    #[inline]
    pub fn peek(&self) -> char {
        self.remaining().chars().next().unwrap_or(EOF_CHAR)
    }

    /// Returns the character after the current one, or [`EOF_CHAR`].
    ///
    /// ```
    /// use lexor_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("<");
    /// assert_eq!(cursor.peek(), '<');
    /// assert_eq!(cursor.peek_next(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    /// Consumes and returns the current character.
    ///
    /// A consumed `'\n'` moves to the next line and resets the column to 1.
    /// Line and column numbers saturate at `u32::MAX`.
    /// At the end of the source nothing moves and [`EOF_CHAR`] is returned.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        c
    }

    /// Consumes a character without counting it as a column.
    ///
    /// Used for the byte-order mark, which is invisible to editors.
    pub(crate) fn skip_invisible(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };
        self.position += c.len_utf8();
        c
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// ```
    /// use lexor_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(">=");
    /// assert!(!cursor.match_char('='));
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte offset `start` and the current
    /// position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
