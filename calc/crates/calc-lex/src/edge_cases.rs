//! Edge case tests for calc-lex

use crate::{tokenize, tokenize_spanned, Token};

fn unknown(text: &str) -> Token {
    Token::Unknown(text.to_string())
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_digit() {
    assert_eq!(tokenize("7"), vec![Token::Number(7)]);
}

#[test]
fn test_edge_single_letter() {
    assert_eq!(tokenize("x"), vec![unknown("x")]);
}

#[test]
fn test_edge_long_word() {
    let word = "q".repeat(10000);
    assert_eq!(tokenize(&word), vec![unknown(&word)]);
}

#[test]
fn test_edge_many_unknown_chars() {
    let tokens = tokenize(&"#".repeat(500));
    assert_eq!(tokens.len(), 500);
    assert!(tokens.iter().all(|t| *t == unknown("#")));
}

#[test]
fn test_edge_keyword_prefix_of_word() {
    assert_eq!(tokenize("abstract"), vec![unknown("abstract")]);
    assert_eq!(tokenize("mi"), vec![unknown("mi")]);
}

#[test]
fn test_edge_keywords_split_by_space() {
    assert_eq!(tokenize("abs min"), vec![Token::Abs, Token::Min]);
    assert_eq!(tokenize("absmin"), vec![unknown("absmin")]);
}

#[test]
fn test_edge_words_split_by_digits() {
    assert_eq!(
        tokenize("foo1bar"),
        vec![unknown("foo"), Token::Number(1), unknown("bar")]
    );
}

#[test]
fn test_edge_underscore_breaks_word() {
    assert_eq!(
        tokenize("a_b"),
        vec![unknown("a"), unknown("_"), unknown("b")]
    );
}

#[test]
fn test_edge_decimal_point() {
    assert_eq!(
        tokenize("1.5"),
        vec![Token::Number(1), unknown("."), Token::Number(5)]
    );
}

#[test]
fn test_edge_unicode_digits_are_not_numbers() {
    // ARABIC-INDIC DIGIT THREE
    assert_eq!(tokenize("\u{663}"), vec![unknown("\u{663}")]);
}

#[test]
fn test_edge_emoji() {
    assert_eq!(
        tokenize("1😀2"),
        vec![Token::Number(1), unknown("😀"), Token::Number(2)]
    );
}

#[test]
fn test_edge_nul_byte() {
    assert_eq!(tokenize("\0"), vec![unknown("\0")]);
}

#[test]
fn test_edge_all_operators_dense() {
    assert_eq!(
        tokenize("1+2-3*4/5%6"),
        vec![
            Token::Number(1),
            Token::Plus,
            Token::Number(2),
            Token::Minus,
            Token::Number(3),
            Token::Multiply,
            Token::Number(4),
            Token::Divide,
            Token::Number(5),
            Token::Modulo,
            Token::Number(6),
        ]
    );
}

#[test]
fn test_edge_double_minus() {
    assert_eq!(
        tokenize("--1"),
        vec![Token::Minus, Token::Minus, Token::Number(1)]
    );
}

#[test]
fn test_edge_unbalanced_brackets() {
    assert_eq!(
        tokenize(")("),
        vec![Token::ClosingBracket, Token::OpeningBracket]
    );
}

#[test]
fn test_edge_whitespace_between_digits_splits_number() {
    assert_eq!(tokenize("1 2"), vec![Token::Number(1), Token::Number(2)]);
}

#[test]
fn test_edge_tab_and_newline_separators() {
    assert_eq!(
        tokenize("max\t(\n1\r\n,2)"),
        tokenize("max(1,2)")
    );
}

#[test]
fn test_edge_spans_do_not_overlap() {
    let spanned = tokenize_spanned("  abs ( 1 ,22)  ");
    for pair in spanned.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }
}

#[test]
fn test_edge_unknown_never_empty() {
    for source in ["&", "foo", "é", " . ", "x_y"] {
        for token in tokenize(source) {
            if let Token::Unknown(text) = token {
                assert!(!text.is_empty(), "empty unknown from {:?}", source);
            }
        }
    }
}
