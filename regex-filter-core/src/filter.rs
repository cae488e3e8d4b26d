//! filter.rs - The `RegexFilter` value type.
//!
//! A `RegexFilter` holds an optional inclusion regex and an optional
//! exclusion regex. A string is included when it does not contain a match of
//! the exclusion regex and, if an inclusion regex is set, contains a match of
//! it. Both regexes are unanchored: callers wanting whole-string matches must
//! anchor their own patterns with `^` and `$`.
//!
//! Equality and hashing look only at the pattern text, never at the compiled
//! automata, so two filters built independently from the same text are
//! interchangeable.
//!
//! License: MIT OR Apache-2.0

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codec::FilterSpec;
use crate::combinator::take_union_of_regexes;
use crate::errors::RegexFilterError;

/// Include/exclude filter over arbitrary strings.
///
/// The value is immutable once built and is `Send + Sync`, so one instance
/// can be shared freely between threads.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "FilterSpec", into = "FilterSpec")]
pub struct RegexFilter {
    // `None` means the corresponding stage is skipped.
    inclusion: Option<Regex>,
    exclusion: Option<Regex>,
    hash: u64,
}

impl RegexFilter {
    /// Builds a filter from two already-combined regexes.
    ///
    /// `None` for `inclusion` means every string passes the inclusion stage;
    /// `None` for `exclusion` means nothing is excluded.
    ///
    /// # Errors
    ///
    /// Returns [`RegexFilterError::PatternSyntax`] if either pattern fails to
    /// compile.
    pub fn new(inclusion: Option<&str>, exclusion: Option<&str>) -> Result<Self, RegexFilterError> {
        let hash = identity_hash(inclusion, exclusion);
        let filter = Self {
            inclusion: inclusion.map(compile).transpose()?,
            exclusion: exclusion.map(compile).transpose()?,
            hash,
        };
        debug!(
            "Built regex filter (inclusion: {:?}, exclusion: {:?})",
            inclusion, exclusion
        );
        Ok(filter)
    }

    /// Builds a filter from lists of independent inclusion and exclusion
    /// patterns. Each list is merged with [`take_union_of_regexes`]; an empty
    /// list disables its stage.
    ///
    /// # Errors
    ///
    /// Returns [`RegexFilterError::PatternSyntax`] if a combined pattern fails
    /// to compile.
    pub fn from_lists<I, E>(inclusions: &[I], exclusions: &[E]) -> Result<Self, RegexFilterError>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let inclusion = take_union_of_regexes(inclusions);
        let exclusion = take_union_of_regexes(exclusions);
        Self::new(inclusion.as_deref(), exclusion.as_deref())
    }

    /// Returns true iff `value` does not match the exclusion regex (if any)
    /// and matches the inclusion regex (if any). Exclusion always wins.
    pub fn is_included(&self, value: &str) -> bool {
        if let Some(exclusion) = &self.exclusion {
            if exclusion.is_match(value) {
                return false;
            }
        }
        match &self.inclusion {
            None => true,
            Some(inclusion) => inclusion.is_match(value),
        }
    }

    /// The inclusion pattern text, if any.
    pub fn inclusion_regex(&self) -> Option<&str> {
        self.inclusion.as_ref().map(Regex::as_str)
    }

    /// The exclusion pattern text, if any.
    pub fn exclusion_regex(&self) -> Option<&str> {
        self.exclusion.as_ref().map(Regex::as_str)
    }
}

fn compile(pattern: &str) -> Result<Regex, RegexFilterError> {
    Regex::new(pattern).map_err(|source| RegexFilterError::PatternSyntax {
        pattern: pattern.to_string(),
        source,
    })
}

fn identity_hash(inclusion: Option<&str>, exclusion: Option<&str>) -> u64 {
    let mut hasher = DefaultHasher::new();
    inclusion.hash(&mut hasher);
    exclusion.hash(&mut hasher);
    hasher.finish()
}

fn escape_delimiter(pattern: &str) -> String {
    pattern.replace(',', "\\,")
}

/// Formats the filter in the textual syntax accepted by
/// [`RegexFilterConverter`](crate::converter::RegexFilterConverter).
///
/// Parsing the output yields an equal filter unless a pattern is empty,
/// starts with `-` or `+`, or ends with a backslash (the backslash then
/// escapes the following delimiter).
impl fmt::Display for RegexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(inclusion) = self.inclusion_regex() {
            f.write_str(&escape_delimiter(inclusion))?;
            if self.exclusion.is_some() {
                f.write_str(",")?;
            }
        }
        if let Some(exclusion) = self.exclusion_regex() {
            write!(f, "-{}", escape_delimiter(exclusion))?;
        }
        Ok(())
    }
}

impl fmt::Debug for RegexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexFilter")
            .field("inclusion", &self.inclusion_regex())
            .field("exclusion", &self.exclusion_regex())
            .finish()
    }
}

impl PartialEq for RegexFilter {
    fn eq(&self, other: &Self) -> bool {
        self.inclusion_regex() == other.inclusion_regex()
            && self.exclusion_regex() == other.exclusion_regex()
    }
}

impl Eq for RegexFilter {}

impl Hash for RegexFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
