//! Tokenize command implementation.
//!
//! Reads one expression, runs it through the tokenizer and prints the
//! resulting tokens. Nothing is printed to standard output when the scan
//! fails.

use std::io::{self, BufRead, Write};

use lexa_lex::{Token, TokenStream, Tokenizer};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{trim_line_ending, OutputFormat, TOKENS_HEADER};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Expression given on the command line. Standard input is read when
    /// this is `None`.
    pub expr: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Write the `Tokens:` header in text output.
    pub header: bool,
    /// Prompt written to standard error before reading standard input.
    pub prompt: Option<String>,
}

impl TokenizeArgs {
    /// Builds arguments from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            expr: None,
            format: config.output.format,
            header: config.output.header,
            prompt: config.show_prompt.then(|| config.prompt.clone()),
        }
    }
}

/// JSON shape of a single token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind().as_str(),
            lexeme: token.lexeme(),
        }
    }
}

/// Runs the tokenize command against the process's standard streams.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_tokenize_with(&args, stdin.lock(), stdout.lock(), io::stderr())
}

/// Runs the tokenize command against arbitrary streams.
///
/// `prompt_out` receives the prompt; `out` receives the tokens.
pub fn run_tokenize_with<R, W, P>(
    args: &TokenizeArgs,
    input: R,
    mut out: W,
    mut prompt_out: P,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let source = match &args.expr {
        Some(expr) => expr.clone(),
        None => {
            if let Some(prompt) = &args.prompt {
                write!(prompt_out, "{}", prompt)?;
                prompt_out.flush()?;
            }
            read_expression(input)?
        },
    };

    debug!(chars = source.chars().count(), "tokenizing expression");
    let tokens = Tokenizer::new().tokenize(&source)?;
    debug!(tokens = tokens.len(), format = %args.format, "writing tokens");

    write_tokens(&tokens, args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Reads a single line, without its line terminator. An empty stream reads
/// as the empty expression.
fn read_expression<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(trim_line_ending(&line).to_string())
}

fn write_tokens<W: Write>(tokens: &TokenStream, args: &TokenizeArgs, out: &mut W) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            if args.header {
                writeln!(out, "{}", TOKENS_HEADER)?;
            }
            write!(out, "{}", tokens)?;
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
