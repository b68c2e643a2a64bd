//! calc-lex - Lexical Analyzer for calculator expressions
//!
//! This crate turns an arithmetic-expression string into a sequence of
//! tokens, the first stage of a calculator front end. It never rejects
//! input: text it cannot classify is returned as [`Token::Unknown`] and left
//! for a later parsing stage to judge.
//!
//! # Example Usage
//!
//! ```
//! use calc_lex::{tokenize, Token};
//!
//! let tokens = tokenize("max(1, 20) % 3");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Max,
//!         Token::OpeningBracket,
//!         Token::Number(1),
//!         Token::Comma,
//!         Token::Number(20),
//!         Token::ClosingBracket,
//!         Token::Modulo,
//!         Token::Number(3),
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`tables`] - Symbol and keyword lookup tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! - **Punctuation**: `(`, `)`, `,`
//! - **Operators**: `+`, `-`, `*`, `/`, `%`
//! - **Keywords**: `abs`, `min`, `max`, `sqr`
//! - **Numbers**: unsigned decimal digit runs, e.g. `42`, `007`
//! - **Unknown**: an unrecognized word (`foo`) or a single unrecognized
//!   character (`&`)
//!
//! Whitespace separates tokens and produces none.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, OverflowPolicy};
pub use tables::{keyword_token, symbol_token};
pub use token::{SpannedToken, Token};

/// Tokenizes `input` in one pass.
///
/// Never fails; an empty or whitespace-only input gives an empty vector.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Tokenizes `input`, folding oversized numbers with `policy`.
///
/// # Example
///
/// ```
/// use calc_lex::{tokenize_with, OverflowPolicy, Token};
///
/// let tokens = tokenize_with("99999999999999999999", OverflowPolicy::Saturating);
/// assert_eq!(tokens, vec![Token::Number(u64::MAX)]);
/// ```
pub fn tokenize_with(input: &str, policy: OverflowPolicy) -> Vec<Token> {
    Lexer::with_policy(input, policy).collect()
}

/// Tokenizes `input`, keeping the source span of every token.
pub fn tokenize_spanned(input: &str) -> Vec<SpannedToken> {
    tokenize_spanned_with(input, OverflowPolicy::default())
}

/// Tokenizes `input` with `policy`, keeping the source span of every token.
pub fn tokenize_spanned_with(input: &str, policy: OverflowPolicy) -> Vec<SpannedToken> {
    let mut lexer = Lexer::with_policy(input, policy);
    std::iter::from_fn(|| lexer.next_spanned()).collect()
}
