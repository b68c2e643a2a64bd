//! Calct CLI - prints the tokens of calculator expressions.
//!
//! This is the main entry point for the calct CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calc_lex::OverflowPolicy;
use commands::{
    common::{OutputFormat, OverflowArg, RenderOptions},
    run_demo, run_init, run_repl, run_tokenize, InitArgs, ReplArgs, TokenizeArgs,
};
use config::Config;
use error::{CalctError, Result};

/// Calct - A CLI tool for calculator expressions
///
/// Calct splits arithmetic expressions into tokens and prints them, one per
/// line or as JSON.
#[derive(Parser, Debug)]
#[command(name = "calct")]
#[command(author = "Calc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prints the tokens of calculator expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CALCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CALCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CALCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the calct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize one expression
    ///
    /// The expression is taken from the command line, from --file, or from
    /// stdin, in that order of preference.
    Tokenize(TokenizeCommand),

    /// Tokenize expressions line by line until end of input
    Repl(ReplCommand),

    /// Tokenize a built-in sample expression
    Demo,

    /// Write a calct.toml with default settings
    Init(InitCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Expression to tokenize
    expr: Option<String>,

    /// Read the expression from a file
    #[arg(short, long, conflicts_with = "expr")]
    file: Option<PathBuf>,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    #[command(flatten)]
    output: OutputFlags,
}

/// Output flags shared by tokenize and repl.
#[derive(clap::Args, Debug)]
struct OutputFlags {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix every token with its line:column position
    #[arg(short, long)]
    spans: bool,

    /// How to fold numbers too large for 64 bits (default: from config)
    #[arg(long, value_enum)]
    overflow: Option<OverflowArg>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// File to write (default: ./calct.toml)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the calct CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let result = execute_command(cli.command, &config);
    if let Err(ref e) = result {
        tracing::error!("{}", e);
    }
    result
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only tokens.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CalctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Demo => run_demo(),
        Commands::Init(args) => execute_init(args),
    }
}

/// Merge output flags over the configuration.
fn resolve_output(flags: &OutputFlags, config: &Config) -> (RenderOptions, OverflowPolicy) {
    let render = RenderOptions {
        format: flags.format.unwrap_or(config.output.format),
        spans: flags.spans || config.output.spans,
    };
    let policy = flags
        .overflow
        .map(OverflowPolicy::from)
        .unwrap_or(config.lexer.overflow);
    (render, policy)
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: &Config) -> Result<()> {
    let (render, policy) = resolve_output(&args.output, config);
    run_tokenize(TokenizeArgs {
        expr: args.expr,
        file: args.file,
        render,
        policy,
    })
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: &Config) -> Result<()> {
    let (render, policy) = resolve_output(&args.output, config);
    run_repl(ReplArgs { render, policy })
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    run_init(InitArgs {
        path: args.path,
        force: args.force,
    })?;
    Ok(())
}
