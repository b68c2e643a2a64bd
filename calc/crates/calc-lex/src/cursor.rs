//! Character cursor for traversing an expression string.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It steps over whole UTF-8
//! scalar values and tracks line/column information alongside the byte
//! offset.

/// A cursor for traversing source text character by character.
///
/// The position only ever moves forward.
///
/// # Example
///
/// ```
/// use calc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("abs(1)");
///
/// assert_eq!(cursor.current_char(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('b'));
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
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("7");
    /// assert_eq!(cursor.current_char(), Some('7'));
    /// assert_eq!(Cursor::new("").current_char(), None);
    /// ```
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.source[self.position..].chars().next(),
            None => None,
        }
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// `peek_char(0)` is the same as [`Cursor::current_char`].
    ///
    /// # Example
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("max");
    /// assert_eq!(cursor.peek_char(1), Some('a'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.source[self.position..].chars().nth(offset)
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing if
    /// already at end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// Returns the number of characters consumed, which may be zero.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Text from byte offset `start` up to the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("foo(");
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(0), "foo");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
