//! The `grep` command: prints the input lines selected by a filter.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use regex_filter_core::RegexFilter;

use crate::cli::GrepCommand;

/// Output options for [`filter_lines`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GrepOptions {
    /// Select the lines the filter rejects.
    pub invert: bool,
    /// Print only the count of selected lines.
    pub count: bool,
}

/// Streams `reader` line by line, writing the selected lines to `out`.
/// Returns the number of selected lines.
pub fn filter_lines<R: BufRead, W: Write>(
    filter: &RegexFilter,
    reader: R,
    out: &mut W,
    options: GrepOptions,
) -> Result<usize> {
    let mut selected = 0usize;
    let mut total = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        total += 1;
        if filter.is_included(&line) == options.invert {
            continue;
        }
        selected += 1;
        if !options.count {
            writeln!(out, "{line}")?;
        }
    }

    if options.count {
        writeln!(out, "{selected}")?;
    }
    debug!("Selected {} of {} line(s)", selected, total);
    Ok(selected)
}

/// Runs `grep`. Exits with 0 if any line was selected, 1 otherwise.
pub fn run_grep_command<W: Write>(args: &GrepCommand, out: &mut W) -> Result<u8> {
    let options = GrepOptions {
        invert: args.invert,
        count: args.count,
    };
    let filter = &args.filter.filter;

    let selected = match &args.input {
        Some(path) => {
            info!("Filtering lines of {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
            filter_lines(filter, BufReader::new(file), out, options)?
        }
        None => {
            let stdin = io::stdin();
            filter_lines(filter, stdin.lock(), out, options)?
        }
    };

    Ok(if selected > 0 { 0 } else { 1 })
}
