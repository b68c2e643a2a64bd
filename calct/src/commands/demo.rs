//! Demo command implementation.
//!
//! Prints the tokens of a fixed sample expression that exercises every
//! token category, including an unknown character.

use std::io::Write;

use calc_lex::tokenize;

use crate::error::Result;

/// The sample expression.
pub const DEMO_EXPRESSION: &str = "(max(123, abs(456)) - sqr(7)) * 8 & 9";

/// Execute the demo command against the process stdout.
pub fn run_demo() -> Result<()> {
    let stdout = std::io::stdout();
    write_demo(&mut stdout.lock())
}

/// Writes `Tokens:` followed by one token per line.
pub fn write_demo(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Tokens:")?;
    for token in tokenize(DEMO_EXPRESSION) {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        write_demo(&mut out).unwrap();
        let expected = "\
Tokens:
OpeningBracketToken
MaxToken
OpeningBracketToken
NumberToken 123
CommaToken
AbsToken
OpeningBracketToken
NumberToken 456
ClosingBracketToken
ClosingBracketToken
MinusToken
SqrToken
OpeningBracketToken
NumberToken 7
ClosingBracketToken
ClosingBracketToken
MultiplyToken
NumberToken 8
UnknownToken &
NumberToken 9
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
