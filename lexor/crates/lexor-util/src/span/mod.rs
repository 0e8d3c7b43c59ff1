//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the scanned buffer with the human-facing
//! line/column of its first character. The byte range is what tools slice
//! with; the line/column is what diagnostics print.
//!
//! # Examples
//!
//! ```
//! use lexor_util::span::Span;
//!
//! let source = "DECLARE INT x$";
//! let span = Span::new(8, 11, 1, 9);
//! assert_eq!(&source[span.start..span.end], "INT");
//! assert_eq!(span.to_string(), "1:9");
//! ```

use std::fmt;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// `start..end` are byte offsets into the source buffer; `line` and
/// `column` are 1-based and refer to `start`. Columns count characters,
/// not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing and for diagnostics without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use lexor_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span, validating the range and the position
    ///
    /// # Examples
    ///
    /// ```
    /// use lexor_util::span::Span;
    ///
    /// assert!(Span::try_new(0, 3, 1, 1).is_ok());
    /// assert!(Span::try_new(5, 3, 1, 1).is_err());
    /// assert!(Span::try_new(0, 3, 0, 1).is_err());
    /// ```
    pub fn try_new(start: usize, end: usize, line: u32, column: u32) -> SpanResult<Self> {
        if start > end {
            return Err(SpanError::InvalidRange { start, end });
        }
        if line == 0 || column == 0 {
            return Err(SpanError::InvalidPosition { line, column });
        }
        Ok(Self::new(start, end, line, column))
    }

    /// Create a zero-length span at a position
    ///
    /// # Examples
    ///
    /// ```
    /// use lexor_util::span::Span;
    ///
    /// let point = Span::point(3, 7);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes; 0 for a reversed range
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if a byte offset falls inside this span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Create a span that covers both `self` and `other`
    ///
    /// The position is taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexor_util::span::Span;
    ///
    /// let a = Span::new(0, 3, 1, 1);
    /// let b = Span::new(8, 10, 2, 4);
    /// let both = a.merge(b);
    /// assert_eq!((both.start, both.end), (0, 10));
    /// assert_eq!((both.line, both.column), (1, 1));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Slice the covered text out of `source`
    ///
    /// Returns `None` if the span does not describe a valid range of
    /// `source` (out of bounds or not on a character boundary).
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
