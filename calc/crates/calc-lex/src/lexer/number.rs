//! Number literal lexing.
//!
//! Numbers are unsigned decimal digit runs. There are no prefixes, signs,
//! separators or fractions: `-5` is a `Minus` followed by `Number(5)` and
//! `1.5` is `Number(1)`, `Unknown(".")`, `Number(5)`.

use crate::token::Token;
use crate::Lexer;

/// What to do when a digit run does not fit in a `u64`.
///
/// Either way the lexer still produces exactly one `Number` token, so
/// tokenizing stays infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OverflowPolicy {
    /// Accumulate modulo 2^64.
    #[default]
    Wrapping,
    /// Clamp to `u64::MAX`.
    Saturating,
}

impl OverflowPolicy {
    /// Folds one more decimal digit into `value`.
    #[inline]
    pub fn push_digit(self, value: u64, digit: u32) -> u64 {
        let digit = u64::from(digit);
        match self {
            OverflowPolicy::Wrapping => value.wrapping_mul(10).wrapping_add(digit),
            OverflowPolicy::Saturating => value.saturating_mul(10).saturating_add(digit),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits.
    ///
    /// Leading zeros are absorbed (`042` is `Number(42)`). Only entered when
    /// the current character is a digit, so the run is never empty.
    pub(crate) fn lex_number(&mut self) -> Token {
        let policy = self.policy();
        let mut value: u64 = 0;

        while let Some(digit) = self.cursor.current_char().and_then(|c| c.to_digit(10)) {
            value = policy.push_digit(value, digit);
            self.cursor.advance();
        }

        Token::Number(value)
    }
}
