//! lexa CLI - command-line front end for the lexa tokenizer.
//!
//! This is the main entry point for the lexa CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_init, run_tokenize, InitArgs, TokenizeArgs};
use config::Config;
use error::{CliError, Result};

/// lexa - Split expressions into tokens
///
/// Reads an expression such as `x = 10 + 20;` and prints its identifiers,
/// numbers, operators, assignments, parentheses and semicolons.
#[derive(Parser, Debug)]
#[command(name = "lexa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split expressions into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXA_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXA_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXA_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexa CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize one expression
    ///
    /// The expression is taken from --expr, or read as a single line from
    /// standard input.
    Tokenize(TokenizeCommand),

    /// Write a default lexa.toml
    Init(InitCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Expression to tokenize instead of reading standard input
    #[arg(short, long)]
    expr: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the "Tokens:" header in text output
    #[arg(long)]
    no_header: bool,

    /// Do not prompt before reading standard input
    #[arg(long)]
    no_prompt: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write lexa.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing lexa.toml
    #[arg(short, long)]
    force: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so that standard output carries only tokens.
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
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, &config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the tokenize command, letting flags override configuration.
fn execute_tokenize(args: TokenizeCommand, config: &Config) -> Result<()> {
    let mut tokenize_args = TokenizeArgs::from_config(config);
    tokenize_args.expr = args.expr;
    if let Some(format) = args.format {
        tokenize_args.format = format;
    }
    if args.no_header {
        tokenize_args.header = false;
    }
    if args.no_prompt {
        tokenize_args.prompt = None;
    }
    run_tokenize(tokenize_args)
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let path = run_init(InitArgs {
        force: args.force,
        path: args.path,
    })?;
    println!("Created {}", path.display());
    Ok(())
}
