//! Command modules for the calct CLI.
//!
//! Each subcommand lives in its own file and exposes an `*Args` struct plus
//! a `run_*` entry point.

pub mod common;

pub mod demo;
pub mod init;
pub mod repl;
pub mod tokenize;

// Re-export command types and functions
pub use demo::run_demo;
pub use init::{run_init, InitArgs};
pub use repl::{run_repl, ReplArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
