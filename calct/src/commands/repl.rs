//! Repl command implementation.
//!
//! Reads expressions line by line and prints the tokens of each one, with a
//! blank line between inputs. Stops at end of input.

use std::io::{BufRead, Write};

use calc_lex::{tokenize_spanned_with, OverflowPolicy};

use crate::commands::common::{decode_lossy, render_tokens, RenderOptions};
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs {
    /// Output rendering.
    pub render: RenderOptions,
    /// Number overflow handling.
    pub policy: OverflowPolicy,
}

/// Execute the repl command against the process stdin/stdout.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let lines = repl(&args, stdin.lock(), &mut stdout.lock())?;
    tracing::info!(lines, "input closed");
    Ok(())
}

/// Tokenizes every line of `input`, returning the number of lines read.
///
/// Lines are split on `\n` with an optional `\r` before it. Invalid UTF-8
/// lexes as `Unknown` and does not end the loop.
pub fn repl(args: &ReplArgs, mut input: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        let line = decode_lossy(std::mem::take(&mut buffer));

        if count > 0 {
            writeln!(out)?;
        }
        let tokens = tokenize_spanned_with(&line, args.policy);
        tracing::debug!(line = count + 1, tokens = tokens.len(), "tokenized line");
        render_tokens(out, &tokens, args.render)?;
        // Flush per line so interactive users see output immediately
        out.flush()?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_separates_lines() {
        let mut out = Vec::new();
        let count = repl(&ReplArgs::default(), "1+2\nabs\n".as_bytes(), &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NumberToken 1\nPlusToken\nNumberToken 2\n\nAbsToken\n"
        );
    }

    #[test]
    fn test_repl_empty_input() {
        let mut out = Vec::new();
        let count = repl(&ReplArgs::default(), "".as_bytes(), &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_repl_continues_past_invalid_utf8() {
        let mut out = Vec::new();
        let count = repl(&ReplArgs::default(), &b"1+2\n\xff&\n3\n"[..], &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NumberToken 1\nPlusToken\nNumberToken 2\n\n\
             UnknownToken \u{FFFD}\nUnknownToken &\n\nNumberToken 3\n"
        );
    }

    #[test]
    fn test_repl_crlf_and_missing_final_newline() {
        let mut out = Vec::new();
        let count = repl(&ReplArgs::default(), "abs\r\n4".as_bytes(), &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "AbsToken\n\nNumberToken 4\n");
    }

    #[test]
    fn test_repl_blank_line_produces_no_tokens() {
        let mut out = Vec::new();
        let count = repl(&ReplArgs::default(), "\n7\n".as_bytes(), &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "\nNumberToken 7\n");
    }
}
