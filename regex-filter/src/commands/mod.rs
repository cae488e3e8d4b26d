//! Implementations of the `regex-filter` subcommands.
//!
//! Every command writes to a caller-supplied writer and returns the process
//! exit status, so the binary stays a thin shell around [`run`].

pub mod check;
pub mod grep;
pub mod wire;

use anyhow::Result;
use std::io::Write;

use crate::cli::Commands;

/// Runs `command`, writing its output to `out`. Returns the exit status.
pub fn run<W: Write>(command: Commands, out: &mut W) -> Result<u8> {
    match command {
        Commands::Grep(args) => grep::run_grep_command(&args, out),
        Commands::Check(args) => check::run_check(&args.filter.filter, &args.candidates, out),
        Commands::Normalize(args) => wire::run_normalize(&args.filter, out),
        Commands::Encode(args) => wire::run_encode(&args.filter, out),
        Commands::Decode(args) => wire::run_decode(&args.hex, out),
    }
}
