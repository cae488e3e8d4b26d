// regex-filter/src/main.rs
//! Entry point for the `regex-filter` binary.
//!
//! Exit status: 0 on a positive result, 1 on a negative one (nothing selected,
//! or a candidate excluded), 2 on any error.

use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

use regex_filter::cli::Cli;
use regex_filter::{logger, run};

const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(cli.command, &mut out).and_then(|code| {
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
