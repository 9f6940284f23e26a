//! infix CLI - tokenizes and parses expression files

use clap::{Parser, Subcommand};
use infix_error::{DiagnosticRenderer, SourceCache, SyntaxError};
use infix_lexer::{Lexer, TokenKind};
use infix_parser::{format_tree, parse, Expr};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "infix")]
#[command(author = "Guilherme Mendes")]
#[command(version = "0.1.0")]
#[command(about = "Infix expression parser", long_about = None)]
struct Cli {
    /// Disable colors in error output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows the tokens of the input (debug)
    Lex {
        /// Input file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Shows the AST of every statement (debug)
    Parse {
        /// Input file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Prints every statement fully parenthesized, one per line
    Fmt {
        /// Input file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lex { input } => {
            let (name, source) = read_input(input.as_ref());
            tracing::info!(input = %name, "tokenizing");

            let mut lexer = Lexer::new(&source, 0);
            let tokens = lexer.tokenize();

            for token in &tokens {
                println!(
                    "  {:4}:{:<3}  {:<14}  {}",
                    token.line(),
                    token.column(),
                    token.kind.to_string(),
                    token.text
                );
            }

            println!("\nTotal: {} tokens", tokens.len());

            if tokens.last().map(|t| t.kind) == Some(TokenKind::Unknown) {
                println!("Tokenization stopped at an unknown character");
            }
        }

        Commands::Parse { input } => {
            let (name, source) = read_input(input.as_ref());
            run_pipeline(&name, &source, cli.no_color, |index, expr| {
                format!("{}.\n{}", index + 1, format_tree(expr))
            });
        }

        Commands::Fmt { input } => {
            let (name, source) = read_input(input.as_ref());
            run_pipeline(&name, &source, cli.no_color, |_, expr| expr.to_string());
        }
    }
}

/// Installs the stderr log subscriber
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads the whole input, from a file or standard input
fn read_input(input: Option<&PathBuf>) -> (String, String) {
    let result = match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map(|source| (path.display().to_string(), source))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map(|_| ("<stdin>".to_string(), source))
        }
    };

    match result {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    }
}

/// Lexes and parses the source, then hands each statement to `emit`.
/// Nothing is printed unless the whole input parses.
fn run_pipeline<F>(name: &str, source: &str, no_color: bool, emit: F)
where
    F: Fn(usize, &Expr) -> String,
{
    let mut cache = SourceCache::new();
    let file_id = cache.add(name, source);

    let mut lexer = Lexer::new(source, file_id);
    let tokens = lexer.tokenize();
    tracing::info!(input = %name, tokens = tokens.len(), "lexed");

    match parse(tokens) {
        Ok(program) => {
            tracing::info!(statements = program.len(), "parsed");
            for (index, statement) in program.iter().enumerate() {
                println!("{}", emit(index, statement));
            }
        }
        Err(err) => {
            report(&cache, &err, no_color);
            std::process::exit(1);
        }
    }
}

fn report(cache: &SourceCache, err: &SyntaxError, no_color: bool) {
    let renderer = if no_color {
        DiagnosticRenderer::new(cache).without_colors()
    } else {
        DiagnosticRenderer::new(cache)
    };
    eprintln!("{}", renderer.render(&err.to_diagnostic()));
}
