//! The `check` command: reports the verdict for each candidate.

use anyhow::Result;
use std::io::Write;

use regex_filter_core::RegexFilter;

/// Writes `included` or `excluded` followed by a tab and the candidate, one
/// line per candidate. Exits with 1 if any candidate is excluded.
pub fn run_check<W: Write>(filter: &RegexFilter, candidates: &[String], out: &mut W) -> Result<u8> {
    let mut all_included = true;
    for candidate in candidates {
        let verdict = if filter.is_included(candidate) {
            "included"
        } else {
            all_included = false;
            "excluded"
        };
        writeln!(out, "{verdict}\t{candidate}")?;
    }
    Ok(if all_included { 0 } else { 1 })
}
