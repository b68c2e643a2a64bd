//! Lexer module.
//!
//! The implementation is split by the kind of input being scanned:
//! - `core` - Main Lexer struct and dispatch
//! - `number` - Decimal literal lexing and overflow handling
//! - `name` - Keyword lexing and the unknown-text fallback

mod core;
mod name;
mod number;

pub use core::Lexer;
pub use number::OverflowPolicy;
