//! Keyword lexing and the unknown-text fallback.
//!
//! Anything that is not whitespace, a digit, or a table symbol lands here.
//! An alphabetic run is either a keyword or one `Unknown` covering the
//! whole word. Any other character becomes an `Unknown` of exactly that one
//! character, so `&^` yields two tokens while `foo` yields one.

use crate::tables::keyword_token;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a keyword or unknown text starting at `first`, the current
    /// character.
    ///
    /// The alphabetic run stops at the first non-letter, so in `abs5` or
    /// `max&` the trailing character is left for the next token.
    pub(crate) fn lex_name(&mut self, first: char) -> Token {
        if !first.is_ascii_alphabetic() {
            self.cursor.advance();
            return Token::Unknown(first.to_string());
        }

        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_alphabetic());
        let word = self.cursor.slice_from(start);

        keyword_token(word).unwrap_or_else(|| Token::Unknown(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_name(source: &str) -> (Token, usize) {
        let mut lexer = Lexer::new(source);
        let first = source.chars().next().unwrap();
        let token = lexer.lex_name(first);
        (token, lexer.position())
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_name("abs"), (Token::Abs, 3));
        assert_eq!(lex_name("min"), (Token::Min, 3));
        assert_eq!(lex_name("max"), (Token::Max, 3));
        assert_eq!(lex_name("sqr"), (Token::Sqr, 3));
    }

    #[test]
    fn test_keyword_stops_before_non_letter() {
        assert_eq!(lex_name("abs5"), (Token::Abs, 3));
        assert_eq!(lex_name("max("), (Token::Max, 3));
        assert_eq!(lex_name("sqr&"), (Token::Sqr, 3));
    }

    #[test]
    fn test_unknown_word_is_one_token() {
        assert_eq!(lex_name("foo"), (Token::Unknown("foo".into()), 3));
        assert_eq!(lex_name("maxx"), (Token::Unknown("maxx".into()), 4));
        assert_eq!(lex_name("absmin"), (Token::Unknown("absmin".into()), 6));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_name("ABS"), (Token::Unknown("ABS".into()), 3));
        assert_eq!(lex_name("Max"), (Token::Unknown("Max".into()), 3));
    }

    #[test]
    fn test_non_letter_is_single_char() {
        assert_eq!(lex_name("&"), (Token::Unknown("&".into()), 1));
        assert_eq!(lex_name("&^"), (Token::Unknown("&".into()), 1));
        assert_eq!(lex_name(".5"), (Token::Unknown(".".into()), 1));
        assert_eq!(lex_name("_x"), (Token::Unknown("_".into()), 1));
    }

    #[test]
    fn test_non_ascii_is_whole_scalar() {
        assert_eq!(lex_name("π2"), (Token::Unknown("π".into()), 2));
        // Non-ASCII letters do not join an alphabetic run
        assert_eq!(lex_name("aé"), (Token::Unknown("a".into()), 1));
    }
}
