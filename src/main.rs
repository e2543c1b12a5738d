//! CLI that tokenizes a toy-language source file and prints the tokens.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr logger, but only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 || args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: toylang [file]");
        eprintln!();
        eprintln!(
            "Tokenizes the file (default: {}) and prints",
            toylang_lexer::DEFAULT_SOURCE
        );
        eprintln!("the token list to stdout. Unrecognized words are");
        eprintln!("echoed on their own line as they are found.");
        return ExitCode::from(2);
    }

    let path = args
        .get(1)
        .map_or(toylang_lexer::DEFAULT_SOURCE, String::as_str);

    let source = match toylang_lexer::load(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = toylang_lexer::scan_with(&source, |text| println!("{text}"));
    println!("{}", toylang_lexer::format(&tokens));

    ExitCode::SUCCESS
}
