// regex-filter/src/lib.rs
//! # Regex Filter CLI
//!
//! Command line front end for `regex-filter-core`. It parses a filter
//! specification from an option or the environment and applies it to lines,
//! candidates or encoded filters.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::run;
