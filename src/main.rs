// AutoSpeed front end: scan, parse, and pretty-print a source file.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use autospeed::{AstPrinter, Lexer};

#[derive(Parser)]
#[command(name = "autospeed")]
#[command(about = "Front end for the AutoSpeed toy language", version)]
struct Cli {
    /// Source file to parse
    input: PathBuf,

    /// Dump the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: cannot read '{}': {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let (tokens, lex_errors) = Lexer::new(&source).scan();
    for err in &lex_errors {
        eprintln!("{}", err);
    }

    if cli.tokens {
        println!("TOKENS:");
        for token in &tokens {
            println!("[{}] {} : {}", token.line, token.kind, token.text);
        }
        println!();
    }

    let (statements, parse_errors) = autospeed::Parser::new(tokens).parse();
    for err in &parse_errors {
        eprintln!("{}", err);
    }
    eprintln!("Parsed {} statement(s)", statements.len());

    println!("{}", AstPrinter.print(&statements));

    if lex_errors.is_empty() && parse_errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
