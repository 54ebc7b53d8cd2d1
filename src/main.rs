//! docspell CLI binary.

use std::io::Write;
use std::process::{self, ExitCode};

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use docspell::cli::args::*;
use docspell::cli::commands::*;

fn main() -> ExitCode {
    let args = DocspellArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Warn,  // Default
        1 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (2+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match execute_command(args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
