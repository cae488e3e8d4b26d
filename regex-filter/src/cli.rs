//! This file defines the command-line interface (CLI) for the regex-filter
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use regex_filter_core::{RegexFilter, TYPE_DESCRIPTION};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regex-filter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Select strings with a comma-separated list of include/exclude regexes",
    long_about = "regex-filter applies a filter such as 'src/.*,-.*_test\\.cc' to lines or candidate strings. \
A leading '-' marks an exclusion, a leading '+' or no prefix marks an inclusion, and '\\,' is a literal comma. \
A string is selected when it matches no exclusion and, if any inclusion is given, matches an inclusion.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress all log output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// The filter specification shared by most subcommands.
#[derive(Args, Debug, Clone)]
pub struct FilterArg {
    // A leading '-' is the exclusion prefix, not a flag.
    #[arg(
        long,
        short = 'f',
        value_name = "SPEC",
        env = "REGEX_FILTER",
        allow_hyphen_values = true,
        help = TYPE_DESCRIPTION
    )]
    pub filter: RegexFilter,
}

/// All available commands for the `regex-filter` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the input lines selected by the filter.
    Grep(GrepCommand),

    /// Report whether each candidate is included; exits with 1 if any is excluded.
    Check(CheckCommand),

    /// Print the canonical textual form of the filter.
    Normalize(FilterArg),

    /// Print the binary encoding of the filter as hex.
    Encode(FilterArg),

    /// Decode a hex-encoded filter and print its textual form.
    Decode(DecodeCommand),
}

/// Arguments for the `grep` command.
#[derive(Args, Debug)]
pub struct GrepCommand {
    #[command(flatten)]
    pub filter: FilterArg,

    /// Print the lines that are not selected instead.
    #[arg(long, short = 'v')]
    pub invert: bool,

    /// Print only the number of selected lines.
    #[arg(long, short = 'c')]
    pub count: bool,

    /// Read lines from this file instead of stdin.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub filter: FilterArg,

    /// Strings to test against the filter.
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<String>,
}

/// Arguments for the `decode` command.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Hex string produced by `encode`.
    #[arg(value_name = "HEX")]
    pub hex: String,
}
