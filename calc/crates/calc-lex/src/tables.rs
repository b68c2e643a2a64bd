//! Classification tables.
//!
//! Two process-wide lookup tables decide what a character or a word means:
//! single-character symbols and function keywords. Both are built once on
//! first use and never mutated afterwards.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::Token;

/// Single-character punctuation and operators.
static SYMBOLS: LazyLock<FxHashMap<char, Token>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    table.insert('+', Token::Plus);
    table.insert('-', Token::Minus);
    table.insert('*', Token::Multiply);
    table.insert('/', Token::Divide);
    table.insert('%', Token::Modulo);
    table.insert('(', Token::OpeningBracket);
    table.insert(')', Token::ClosingBracket);
    table.insert(',', Token::Comma);
    table
});

/// Function keywords. Matching is exact and case-sensitive.
static KEYWORDS: LazyLock<FxHashMap<&'static str, Token>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    table.insert("abs", Token::Abs);
    table.insert("min", Token::Min);
    table.insert("max", Token::Max);
    table.insert("sqr", Token::Sqr);
    table
});

/// Looks up a single-character symbol.
///
/// # Example
///
/// ```
/// use calc_lex::{symbol_token, Token};
///
/// assert_eq!(symbol_token('%'), Some(Token::Modulo));
/// assert_eq!(symbol_token('&'), None);
/// ```
pub fn symbol_token(c: char) -> Option<Token> {
    SYMBOLS.get(&c).cloned()
}

/// Looks up a function keyword.
///
/// # Example
///
/// ```
/// use calc_lex::{keyword_token, Token};
///
/// assert_eq!(keyword_token("sqr"), Some(Token::Sqr));
/// assert_eq!(keyword_token("SQR"), None);
/// ```
pub fn keyword_token(word: &str) -> Option<Token> {
    KEYWORDS.get(word).cloned()
}
