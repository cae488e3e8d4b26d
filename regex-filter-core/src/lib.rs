// regex-filter-core/src/lib.rs
//! # Regex Filter Core Library
//!
//! `regex-filter-core` decides whether a string is included by a compact,
//! user-supplied list of include/exclude regular expressions such as
//! `src/.*,-.*_test\.cc`. It is meant for selecting subsets of identifiers
//! (file paths, target names) from a single option value.
//!
//! ## Modules
//!
//! * `filter`: The immutable [`RegexFilter`] value and its matching rule.
//! * `converter`: Parsing of the comma-separated textual syntax.
//! * `combinator`: Merging many independent patterns into one union pattern.
//! * `codec`: Binary wire format (bincode) and serde representation.
//! * `errors`: The [`RegexFilterError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use regex_filter_core::RegexFilter;
//!
//! let filter: RegexFilter = r"src/.*,-.*_test\.cc".parse().unwrap();
//!
//! assert!(filter.is_included("src/foo.cc"));
//! assert!(!filter.is_included("src/foo_test.cc"));
//! assert!(!filter.is_included("other/foo.cc"));
//! ```
//!
//! ## Matching Rule
//!
//! Exclusion always wins: a string matching the exclusion pattern is never
//! included. Otherwise it is included if there is no inclusion pattern or
//! the inclusion pattern matches somewhere within it.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod codec;
pub mod combinator;
pub mod converter;
pub mod errors;
pub mod filter;

/// Re-exports the filter value type.
pub use filter::RegexFilter;

/// Re-exports the custom error type for clear error reporting.
pub use errors::RegexFilterError;

/// Re-exports the textual syntax parser.
pub use converter::{
    parse_pattern_lists,
    split_pieces,
    Converter,
    PatternLists,
    RegexFilterConverter,
    TYPE_DESCRIPTION,
};

pub use combinator::take_union_of_regexes;

/// Re-exports the binary wire format entry points.
pub use codec::{deserialize, serialize, FilterSpec};
