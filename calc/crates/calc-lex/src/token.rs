//! Token definitions for arithmetic expressions.
//!
//! [`Token`] is a closed set: punctuation, the five binary operators, the
//! four function keywords, decimal numbers, and an `Unknown` fallback that
//! carries the text the lexer could not classify.

use std::fmt;

use calc_util::Span;

/// A lexical token of an arithmetic expression.
///
/// Only `Number` and `Unknown` carry a payload. Matching on `Token` should
/// stay exhaustive so that adding a variant forces every consumer to be
/// revisited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", content = "value")
)]
pub enum Token {
    /// `(`
    OpeningBracket,
    /// `)`
    ClosingBracket,
    /// `,`
    Comma,
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
    /// `min`
    Min,
    /// `max`
    Max,
    /// `abs`
    Abs,
    /// `sqr`
    Sqr,
    /// Unsigned decimal literal. A leading `-` is always a separate
    /// [`Token::Minus`].
    Number(u64),
    /// Text that could not be classified. Never empty.
    Unknown(String),
}

impl Token {
    /// Variant name, without payload.
    pub fn name(&self) -> &'static str {
        match self {
            Token::OpeningBracket => "OpeningBracket",
            Token::ClosingBracket => "ClosingBracket",
            Token::Comma => "Comma",
            Token::Plus => "Plus",
            Token::Minus => "Minus",
            Token::Multiply => "Multiply",
            Token::Divide => "Divide",
            Token::Modulo => "Modulo",
            Token::Min => "Min",
            Token::Max => "Max",
            Token::Abs => "Abs",
            Token::Sqr => "Sqr",
            Token::Number(_) => "Number",
            Token::Unknown(_) => "Unknown",
        }
    }

    /// Returns true for the binary arithmetic operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Multiply | Token::Divide | Token::Modulo
        )
    }

    /// Returns true for the function keywords.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Min | Token::Max | Token::Abs | Token::Sqr)
    }

    /// Returns true for brackets and the comma.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Token::OpeningBracket | Token::ClosingBracket | Token::Comma
        )
    }

    /// Returns true if the lexer could not classify this token.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Token::Unknown(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "NumberToken {}", value),
            Token::Unknown(text) => write!(f, "UnknownToken {}", text),
            other => write!(f, "{}Token", other.name()),
        }
    }
}

/// A token together with the source range it was lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    /// The classified token.
    pub token: Token,
    /// Where in the source the token came from.
    pub span: Span,
}

impl SpannedToken {
    /// Pairs a token with its span.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
