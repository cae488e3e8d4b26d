//! converter.rs - Parses the comma-separated include/exclude syntax.
//!
//! The input is a list of regexes separated by `,`. A comma preceded by a
//! backslash (`\,`) belongs to the regex and is not a delimiter. A leading `-`
//! marks an exclusion, a leading `+` (or no prefix) marks an inclusion, and
//! empty entries are ignored.
//!
//! License: MIT OR Apache-2.0

use std::str::FromStr;

use log::debug;

use crate::errors::RegexFilterError;
use crate::filter::RegexFilter;

/// One-line description of the accepted syntax, suitable for help text.
pub const TYPE_DESCRIPTION: &str =
    "a comma-separated list of regex expressions with prefix '-' specifying excluded paths";

/// Converts a textual option value into a typed value.
///
/// This is the seam an option-parsing layer plugs into.
pub trait Converter<T> {
    /// Parses `input`, failing with a configuration error if it is invalid.
    fn convert(&self, input: &str) -> Result<T, RegexFilterError>;

    /// Human-readable description of the expected input.
    fn type_description(&self) -> &'static str;
}

/// Inclusion and exclusion patterns, in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternLists {
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
}

/// Splits `input` on every `,` not preceded by `\`, then unescapes `\,` to
/// `,` in each piece. Empty pieces are kept.
pub fn split_pieces(input: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut after_backslash = false;

    for c in input.chars() {
        if c == ',' && !after_backslash {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
        after_backslash = c == '\\';
    }
    pieces.push(current);

    pieces
        .into_iter()
        .map(|piece| piece.replace("\\,", ","))
        .collect()
}

/// Sorts the pieces of `input` into inclusion and exclusion lists.
///
/// Patterns are not compiled here; duplicates are kept.
pub fn parse_pattern_lists(input: &str) -> PatternLists {
    let mut lists = PatternLists::default();

    for piece in split_pieces(input) {
        let (is_excluded, pattern) = if let Some(rest) = piece.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = piece.strip_prefix('+') {
            (false, rest)
        } else {
            (false, piece.as_str())
        };
        if pattern.is_empty() {
            continue;
        }
        if is_excluded {
            lists.exclusions.push(pattern.to_string());
        } else {
            lists.inclusions.push(pattern.to_string());
        }
    }

    lists
}

/// [`Converter`] producing a [`RegexFilter`] from the comma-separated syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFilterConverter;

impl Converter<RegexFilter> for RegexFilterConverter {
    fn convert(&self, input: &str) -> Result<RegexFilter, RegexFilterError> {
        let lists = parse_pattern_lists(input);
        debug!(
            "Parsed filter '{}' into {} inclusion and {} exclusion pattern(s)",
            input,
            lists.inclusions.len(),
            lists.exclusions.len()
        );
        RegexFilter::from_lists(&lists.inclusions, &lists.exclusions)
    }

    fn type_description(&self) -> &'static str {
        TYPE_DESCRIPTION
    }
}

impl FromStr for RegexFilter {
    type Err = RegexFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegexFilterConverter.convert(s)
    }
}
