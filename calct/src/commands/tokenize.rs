//! Tokenize command implementation.
//!
//! Reads one expression (inline, from a file, or from stdin) and prints its
//! tokens.

use std::io::{Read, Write};
use std::path::PathBuf;

use calc_lex::{tokenize_spanned_with, OverflowPolicy};

use crate::commands::common::{read_input, render_tokens, RenderOptions};
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Inline expression.
    pub expr: Option<String>,
    /// File holding the expression.
    pub file: Option<PathBuf>,
    /// Output rendering.
    pub render: RenderOptions,
    /// Number overflow handling.
    pub policy: OverflowPolicy,
}

/// Execute the tokenize command against the process stdin/stdout.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tokenize_to(&args, stdin.lock(), &mut stdout.lock())
}

/// Tokenizes the selected input and renders it to `out`.
pub fn tokenize_to(args: &TokenizeArgs, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    let source = read_input(args.expr.as_deref(), args.file.as_deref(), stdin)?;
    let tokens = tokenize_spanned_with(&source, args.policy);

    let unknown = tokens.iter().filter(|t| t.token.is_unknown()).count();
    tracing::debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        unknown,
        policy = ?args.policy,
        "tokenized input"
    );

    render_tokens(out, &tokens, args.render)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::OutputFormat;

    fn run(args: TokenizeArgs, stdin: &str) -> String {
        let mut out = Vec::new();
        tokenize_to(&args, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tokenize_inline_expression() {
        let args = TokenizeArgs {
            expr: Some("sqr(2) % 3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            run(args, ""),
            "SqrToken\nOpeningBracketToken\nNumberToken 2\nClosingBracketToken\nModuloToken\nNumberToken 3\n"
        );
    }

    #[test]
    fn test_tokenize_stdin() {
        let args = TokenizeArgs::default();
        assert_eq!(run(args, "1 / foo\n"), "NumberToken 1\nDivideToken\nUnknownToken foo\n");
    }

    #[test]
    fn test_tokenize_saturating_json() {
        let args = TokenizeArgs {
            expr: Some("99999999999999999999".to_string()),
            render: RenderOptions {
                format: OutputFormat::Json,
                spans: false,
            },
            policy: OverflowPolicy::Saturating,
            ..Default::default()
        };
        assert_eq!(
            run(args, ""),
            "[{\"kind\":\"Number\",\"value\":18446744073709551615}]\n"
        );
    }

    #[test]
    fn test_tokenize_invalid_utf8_stdin() {
        let mut out = Vec::new();
        tokenize_to(&TokenizeArgs::default(), &b"7\xff"[..], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NumberToken 7\nUnknownToken \u{FFFD}\n"
        );
    }
}
