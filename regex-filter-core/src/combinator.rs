//! combinator.rs - Merges independent patterns into one union pattern.
//!
//! Each member is wrapped in its own group before joining with `|`, so an
//! alternation or anchor inside one member never reaches its neighbours.
//! The `regex` crate has no atomic groups; plain non-capturing groups are
//! used instead, which is equivalent for a finite automaton engine.
//!
//! License: MIT OR Apache-2.0

use log::trace;

const MEMBER_OPEN: &str = "(?:";
const MEMBER_CLOSE: &str = ")";

/// Converts a list of regex expressions into a single regex representing
/// their union, or `None` when the list is empty.
///
/// A single pattern has no neighbours to interact with and is returned as
/// is, so a one-element list and the bare pattern give equal filters.
///
/// The output is deterministic: the same input order always yields the same
/// string, which matters because filter equality is textual.
pub fn take_union_of_regexes<S: AsRef<str>>(regexes: &[S]) -> Option<String> {
    match regexes {
        [] => return None,
        [single] => return Some(single.as_ref().to_string()),
        _ => {}
    }

    let separator = format!("{MEMBER_CLOSE}|{MEMBER_OPEN}");
    let joined = regexes
        .iter()
        .map(|regex| regex.as_ref())
        .collect::<Vec<&str>>()
        .join(&separator);
    let union = format!("(?:{MEMBER_OPEN}{joined}{MEMBER_CLOSE})");

    trace!("Combined {} pattern(s) into '{}'", regexes.len(), union);
    Some(union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn empty_list_yields_no_pattern() {
        let empty: [&str; 0] = [];
        assert_eq!(take_union_of_regexes(&empty), None);
    }

    #[test]
    fn single_pattern_is_returned_unchanged() {
        assert_eq!(take_union_of_regexes(&["a|^b"]), Some("a|^b".to_string()));
    }

    #[test]
    fn members_are_joined_in_order() {
        assert_eq!(
            take_union_of_regexes(&["a", "b|c", "d"]),
            Some("(?:(?:a)|(?:b|c)|(?:d))".to_string())
        );
    }

    #[test]
    fn anchors_stay_inside_their_member() {
        let union = take_union_of_regexes(&["^foo$", "bar+"]).unwrap();
        let re = Regex::new(&union).unwrap();

        assert!(re.is_match("foo"));
        assert!(re.is_match("xxbarrrryy"));
        assert!(!re.is_match("foox"));
        assert!(!re.is_match("ba"));
    }

    #[test]
    fn accepts_owned_strings() {
        let owned = vec![String::from("x"), String::from("y")];
        assert_eq!(
            take_union_of_regexes(&owned),
            Some("(?:(?:x)|(?:y))".to_string())
        );
    }
}
