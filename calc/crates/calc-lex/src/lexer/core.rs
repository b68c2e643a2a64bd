//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use calc_util::Span;

use crate::cursor::Cursor;
use crate::lexer::OverflowPolicy;
use crate::tables::symbol_token;
use crate::token::{SpannedToken, Token};

/// Lexer for arithmetic expressions.
///
/// Each call to [`Lexer::next_token`] skips whitespace and classifies the
/// next character: digits start a number, table symbols map directly, and
/// everything else goes through name lexing. Lexing never fails.
///
/// # Example
///
/// ```
/// use calc_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::new("abs(-4)");
/// assert_eq!(lexer.next_token(), Some(Token::Abs));
/// assert_eq!(lexer.next_token(), Some(Token::OpeningBracket));
/// assert_eq!(lexer.next_token(), Some(Token::Minus));
/// assert_eq!(lexer.next_token(), Some(Token::Number(4)));
/// assert_eq!(lexer.next_token(), Some(Token::ClosingBracket));
/// assert_eq!(lexer.next_token(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// How digit runs too long for `u64` are folded.
    policy: OverflowPolicy,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default [`OverflowPolicy`].
    pub fn new(source: &'a str) -> Self {
        Self::with_policy(source, OverflowPolicy::default())
    }

    /// Creates a new lexer that folds oversized numbers with `policy`.
    pub fn with_policy(source: &'a str, policy: OverflowPolicy) -> Self {
        Self {
            cursor: Cursor::new(source),
            policy,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.next_spanned().map(|spanned| spanned.token)
    }

    /// Returns the next token along with the source span it covers.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_lex::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("  max");
    /// let spanned = lexer.next_spanned().unwrap();
    /// assert_eq!(spanned.token, Token::Max);
    /// assert_eq!((spanned.span.start, spanned.span.end), (2, 5));
    /// assert_eq!(spanned.span.column, 3);
    /// ```
    pub fn next_spanned(&mut self) -> Option<SpannedToken> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let c = self.cursor.current_char()?;
        let token = if c.is_ascii_digit() {
            self.lex_number()
        } else if let Some(token) = symbol_token(c) {
            self.cursor.advance();
            token
        } else {
            self.lex_name(c)
        };

        Some(SpannedToken::new(token, self.token_span()))
    }

    /// The overflow policy this lexer was created with.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns the current line number (1-based).
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

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Whitespace as the C locale defines it, vertical tab included.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
