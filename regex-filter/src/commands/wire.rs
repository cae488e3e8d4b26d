//! The `normalize`, `encode` and `decode` commands.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use regex_filter_core::{deserialize, serialize, RegexFilter};

/// Prints the canonical textual form of `filter`.
pub fn run_normalize<W: Write>(filter: &RegexFilter, out: &mut W) -> Result<u8> {
    writeln!(out, "{filter}")?;
    Ok(0)
}

/// Prints the binary encoding of `filter` as lowercase hex.
pub fn run_encode<W: Write>(filter: &RegexFilter, out: &mut W) -> Result<u8> {
    let bytes = serialize(filter).context("Failed to encode filter")?;
    writeln!(out, "{}", hex::encode(bytes))?;
    Ok(0)
}

/// Decodes a hex-encoded filter and prints its textual form.
pub fn run_decode<W: Write>(input: &str, out: &mut W) -> Result<u8> {
    let bytes = hex::decode(input.trim()).context("Input is not valid hex")?;
    debug!("Decoding {} byte(s)", bytes.len());
    let filter = deserialize(&bytes).context("Failed to decode filter")?;
    writeln!(out, "{filter}")?;
    Ok(0)
}
