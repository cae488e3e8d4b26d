//! codec.rs - Binary and serde encodings of `RegexFilter`.
//!
//! Wire format (bincode standard configuration): for the inclusion pattern,
//! then the exclusion pattern, one flag byte (`0` absent, `1` present)
//! followed by the pattern as a varint-length-prefixed UTF-8 string when the
//! flag is set. Decoding always rebuilds the filter from the two combined
//! pattern strings, never from pattern lists.
//!
//! License: MIT OR Apache-2.0

use bincode::de::Decoder;
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{config, Decode, Encode};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::RegexFilterError;
use crate::filter::RegexFilter;

/// Plain-data form of a filter: the two combined pattern strings.
///
/// Used as the serde representation of [`RegexFilter`] and as the decoded
/// shape of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct FilterSpec {
    pub inclusion: Option<String>,
    pub exclusion: Option<String>,
}

impl From<RegexFilter> for FilterSpec {
    fn from(filter: RegexFilter) -> Self {
        Self {
            inclusion: filter.inclusion_regex().map(str::to_owned),
            exclusion: filter.exclusion_regex().map(str::to_owned),
        }
    }
}

impl TryFrom<FilterSpec> for RegexFilter {
    type Error = RegexFilterError;

    fn try_from(spec: FilterSpec) -> Result<Self, Self::Error> {
        RegexFilter::new(spec.inclusion.as_deref(), spec.exclusion.as_deref())
    }
}

fn encode_pattern<E: Encoder>(pattern: Option<&str>, encoder: &mut E) -> Result<(), EncodeError> {
    match pattern {
        None => false.encode(encoder),
        Some(pattern) => {
            true.encode(encoder)?;
            pattern.encode(encoder)
        }
    }
}

impl Encode for RegexFilter {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encode_pattern(self.inclusion_regex(), encoder)?;
        encode_pattern(self.exclusion_regex(), encoder)
    }
}

impl<Context> Decode<Context> for RegexFilter {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let spec: FilterSpec = Decode::decode(decoder)?;
        RegexFilter::try_from(spec).map_err(|e| DecodeError::OtherString(e.to_string()))
    }
}

/// Encodes `filter` into the binary wire format.
pub fn serialize(filter: &RegexFilter) -> Result<Vec<u8>, RegexFilterError> {
    let bytes = bincode::encode_to_vec(filter, config::standard())?;
    debug!("Serialized regex filter into {} byte(s)", bytes.len());
    Ok(bytes)
}

/// Decodes a filter previously produced by [`serialize`].
///
/// # Errors
///
/// * [`RegexFilterError::Decode`] if the bytes are truncated, carry an invalid
///   flag or string, or are followed by trailing data.
/// * [`RegexFilterError::PatternSyntax`] if a decoded pattern does not compile.
pub fn deserialize(bytes: &[u8]) -> Result<RegexFilter, RegexFilterError> {
    let (spec, read): (FilterSpec, usize) =
        bincode::decode_from_slice(bytes, config::standard())?;
    if read != bytes.len() {
        return Err(RegexFilterError::Decode(format!(
            "{} trailing byte(s) after filter",
            bytes.len() - read
        )));
    }
    RegexFilter::try_from(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_is_two_absent_flags() {
        let filter = RegexFilter::new(None, None).unwrap();
        assert_eq!(serialize(&filter).unwrap(), vec![0, 0]);
    }

    #[test]
    fn layout_is_flag_then_string() {
        let filter = RegexFilter::new(Some("ab"), Some("c")).unwrap();
        assert_eq!(
            serialize(&filter).unwrap(),
            vec![1, 2, b'a', b'b', 1, 1, b'c']
        );

        let exclusion_only = RegexFilter::new(None, Some("c")).unwrap();
        assert_eq!(serialize(&exclusion_only).unwrap(), vec![0, 1, 1, b'c']);
    }

    #[test]
    fn length_prefix_is_one_byte_below_251() {
        let pattern = "a".repeat(200);
        let filter = RegexFilter::new(Some(pattern.as_str()), None).unwrap();
        let bytes = serialize(&filter).unwrap();

        assert_eq!(bytes.len(), 1 + 1 + 200 + 1);
        assert_eq!(&bytes[..2], &[1, 200]);
        assert_eq!(deserialize(&bytes).unwrap(), filter);
    }

    #[test]
    fn round_trips_every_shape() {
        let shapes = [
            (None, None),
            (Some("^src/"), None),
            (None, Some("_test\\.cc$")),
            (Some("a,b"), Some("(?:(?:x)|(?:y))")),
        ];
        for (inclusion, exclusion) in shapes {
            let filter = RegexFilter::new(inclusion, exclusion).unwrap();
            let decoded = deserialize(&serialize(&filter).unwrap()).unwrap();
            assert_eq!(decoded, filter);
            assert_eq!(decoded.inclusion_regex(), inclusion);
            assert_eq!(decoded.exclusion_regex(), exclusion);
        }
    }

    #[test]
    fn truncated_input_is_a_decode_error() {
        let err = deserialize(&[1, 5, b'a']).unwrap_err();
        assert!(matches!(err, RegexFilterError::Decode(_)));

        let err = deserialize(&[]).unwrap_err();
        assert!(matches!(err, RegexFilterError::Decode(_)));
    }

    #[test]
    fn invalid_flag_is_a_decode_error() {
        let err = deserialize(&[2, 0]).unwrap_err();
        assert!(matches!(err, RegexFilterError::Decode(_)));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let err = deserialize(&[0, 0, 0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to decode regex filter: 1 trailing byte(s) after filter"
        );
    }

    #[test]
    fn malformed_pattern_propagates_as_syntax_error() {
        let err = deserialize(&[1, 1, b'(', 0]).unwrap_err();
        assert_eq!(err.pattern(), Some("("));
    }

    #[test]
    fn nested_bincode_decode_uses_direct_constructor() {
        let filter = RegexFilter::new(Some("inc"), Some("exc")).unwrap();
        let bytes = bincode::encode_to_vec((7u8, &filter), config::standard()).unwrap();
        let ((tag, decoded), _): ((u8, RegexFilter), usize) =
            bincode::decode_from_slice(&bytes, config::standard()).unwrap();
        assert_eq!(tag, 7);
        assert_eq!(decoded, filter);

        let bad = bincode::decode_from_slice::<RegexFilter, _>(&[1, 1, b'['], config::standard());
        assert!(bad.is_err());
    }

    #[test]
    fn serde_representation_uses_pattern_strings() {
        let filter = RegexFilter::new(Some("a"), None).unwrap();
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"inclusion":"a","exclusion":null}"#);

        let back: RegexFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);

        let bad = serde_json::from_str::<RegexFilter>(r#"{"inclusion":"(","exclusion":null}"#);
        assert!(bad.unwrap_err().to_string().contains("Failed to build valid regular expression"));
    }
}
