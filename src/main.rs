//! jsoncheck CLI.
//!
//! Checks that a file contains valid JSON in the strict dialect accepted
//! by the library. Exits 0 when the file parses, 1 on any read, lex, or
//! parse failure. Diagnostics go to the logging subscriber; the parsed
//! tree is only rendered at debug verbosity.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "jsoncheck")]
#[command(about = "Check that a file contains valid JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the file to check
    file_name: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let content = match std::fs::read_to_string(&cli.file_name) {
        Ok(content) => content,
        Err(err) => {
            error!("{}: {}", cli.file_name.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match jsoncheck::parse(&content) {
        Ok(value) => {
            debug!("{}: {}", cli.file_name.display(), jsoncheck::render(&value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}: {}", cli.file_name.display(), err);
            ExitCode::FAILURE
        }
    }
}
