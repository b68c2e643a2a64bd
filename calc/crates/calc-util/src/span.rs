//! Span module - Source location tracking.
//!
//! A [`Span`] records where in an expression string a token came from,
//! both as a byte range and as a human-readable line/column pair.
//!
//! # Examples
//!
//! ```
//! use calc_util::span::Span;
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.slice("max(abs(1))").unwrap(), "abs");
//! ```

use std::fmt;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in the source
/// plus the 1-based line and column of `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span from byte offsets and a line/column position.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_util::span::Span;
    ///
    /// let span = Span::new(0, 3, 1, 1);
    /// assert_eq!(span.start, 0);
    /// assert_eq!(span.end, 3);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at a line/column position.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `offset` falls inside the span.
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// The line/column of the result is taken from whichever span starts
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_util::span::Span;
    ///
    /// let a = Span::new(0, 3, 1, 1);
    /// let b = Span::new(4, 7, 1, 5);
    /// assert_eq!(a.to(b), Span::new(0, 7, 1, 1));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Borrow the text this span covers in `source`.
    ///
    /// # Errors
    ///
    /// Fails if the span is inverted, runs past the end of `source`, or
    /// splits a multi-byte character.
    pub fn slice<'a>(&self, source: &'a str) -> SpanResult<&'a str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                len: source.len(),
                start: self.start,
                end: self.end,
            });
        }
        for offset in [self.start, self.end] {
            if !source.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary { offset });
            }
        }
        Ok(&source[self.start..self.end])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
