//! Line-oriented driver: parses each stdin line and prints the result.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use argvec::tokenizer::Tokenizer;

/// Splits shell-style command lines read from stdin into argument vectors.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Separator bytes to use instead of space, tab, and newline
    #[arg(short, long)]
    ifs: Option<String>,
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut tokenizer = Tokenizer::new();
    if let Some(ifs) = &cli.ifs {
        tokenizer.configure_separators(Some(ifs.as_bytes()));
        debug!(ifs = %ifs, "separator set replaced");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        debug!(bytes = line.len(), "parsing line");

        match tokenizer.parse(&line) {
            Ok(argv) => {
                writeln!(out, "argument count: {}", argv.argc())?;
                writeln!(out, "data length: {}", argv.data_len())?;
                for (index, arg) in argv.args().enumerate() {
                    writeln!(out, "argument {index}: {}", String::from_utf8_lossy(arg))?;
                }
            }
            Err(error) => {
                writeln!(
                    out,
                    "parse error: {}: {}: at input column {}",
                    error.code(),
                    error.message,
                    error.column.unwrap_or(0),
                )?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("argvec: {error}");
            ExitCode::FAILURE
        }
    }
}
