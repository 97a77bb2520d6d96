//! Signature header parsing.
//!
//! A header is a comma-separated list of `key=value` pairs:
//!
//! ```text
//! t=1632994609,v1=22a8bcdc6bf94abbe664910a4ee885f0a3f859a8c0d50f80e539618938960c08
//! ```
//!
//! `t` holds the signing time in unix seconds. Every entry under the
//! scheme key is a candidate signature. Other keys are ignored.

use std::borrow::Cow;

/// Timestamp state of a parsed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTimestamp {
    /// No `t` entry was present
    Missing,
    /// The last `t` entry was not a base-10 integer
    Invalid,
    /// Seconds since the unix epoch
    Seconds(i64),
}

impl HeaderTimestamp {
    /// The parsed seconds, if any.
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Self::Seconds(seconds) => Some(*seconds),
            _ => None,
        }
    }
}

/// Timestamp and candidate signatures extracted from a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Value of the last `t` entry
    pub timestamp: HeaderTimestamp,
    /// Values under the scheme key, in order of appearance
    pub signatures: Vec<String>,
}

/// Parse a signature header, collecting signatures under `scheme`.
///
/// Never fails: an empty or garbled header yields a missing timestamp
/// and no signatures.
pub fn parse_header(header: &str, scheme: &str) -> ParsedHeader {
    header.split(',').fold(
        ParsedHeader {
            timestamp: HeaderTimestamp::Missing,
            signatures: Vec::new(),
        },
        |mut accum, item| {
            let (key, value) = item.split_once('=').unwrap_or((item, ""));

            if key == "t" {
                accum.timestamp = value
                    .parse()
                    .map_or(HeaderTimestamp::Invalid, HeaderTimestamp::Seconds);
            }

            if key == scheme {
                accum.signatures.push(value.to_string());
            }

            accum
        },
    )
}

/// A signature header as handed over by the transport layer.
///
/// Byte input is decoded as UTF-8, replacing invalid sequences. A header
/// that shows up more than once arrives as [`SignatureHeader::List`] and
/// is rejected by the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureHeader<'a> {
    /// A single header value
    Single(Cow<'a, str>),
    /// Several values for the same header
    List(Vec<Cow<'a, str>>),
}

impl<'a> From<&'a str> for SignatureHeader<'a> {
    fn from(value: &'a str) -> Self {
        Self::Single(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for SignatureHeader<'a> {
    fn from(value: &'a String) -> Self {
        Self::Single(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for SignatureHeader<'_> {
    fn from(value: String) -> Self {
        Self::Single(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for SignatureHeader<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Single(String::from_utf8_lossy(value))
    }
}

impl From<Vec<u8>> for SignatureHeader<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Single(Cow::Owned(String::from_utf8_lossy(&value).into_owned()))
    }
}

impl<'a> From<Vec<&'a str>> for SignatureHeader<'a> {
    fn from(values: Vec<&'a str>) -> Self {
        Self::List(values.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for SignatureHeader<'_> {
    fn from(values: Vec<String>) -> Self {
        Self::List(values.into_iter().map(Cow::Owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNATURE: &str = "22a8bcdc6bf94abbe664910a4ee885f0a3f859a8c0d50f80e539618938960c08";

    #[test]
    fn test_parse_valid_header() {
        let header = format!("t=1632994609,v1={SIGNATURE}");
        let parsed = parse_header(&header, "v1");

        assert_eq!(parsed.timestamp, HeaderTimestamp::Seconds(1632994609));
        assert_eq!(parsed.signatures, vec![SIGNATURE.to_string()]);
    }

    #[test]
    fn test_parse_collects_signatures_in_order() {
        let parsed = parse_header("v1=aa,t=5,v0=zz,v1=bb", "v1");

        assert_eq!(parsed.timestamp, HeaderTimestamp::Seconds(5));
        assert_eq!(parsed.signatures, vec!["aa", "bb"]);
    }

    #[test]
    fn test_parse_last_timestamp_wins() {
        let parsed = parse_header("t=1,t=2", "v1");
        assert_eq!(parsed.timestamp, HeaderTimestamp::Seconds(2));

        let parsed = parse_header("t=1,t=abc", "v1");
        assert_eq!(parsed.timestamp, HeaderTimestamp::Invalid);
    }

    #[test]
    fn test_parse_zero_timestamp_is_found() {
        let parsed = parse_header("t=0", "v1");
        assert_eq!(parsed.timestamp, HeaderTimestamp::Seconds(0));
    }

    #[test]
    fn test_parse_missing_timestamp() {
        let parsed = parse_header("v1=abc", "v1");
        assert_eq!(parsed.timestamp, HeaderTimestamp::Missing);
        assert_eq!(parsed.timestamp.seconds(), None);
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let parsed = parse_header("t=10,v0=old,future=x,noequals", "v1");

        assert_eq!(parsed.timestamp, HeaderTimestamp::Seconds(10));
        assert!(parsed.signatures.is_empty());
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let parsed = parse_header("t=1,v1=ab=cd", "v1");
        assert_eq!(parsed.signatures, vec!["ab=cd"]);
    }

    #[test]
    fn test_parse_timestamp_without_value() {
        let parsed = parse_header("t,v1=ab", "v1");
        assert_eq!(parsed.timestamp, HeaderTimestamp::Invalid);
    }

    #[test]
    fn test_parse_uses_given_scheme() {
        let parsed = parse_header("t=1,v1=aa,v2=bb", "v2");
        assert_eq!(parsed.signatures, vec!["bb"]);
    }

    #[test]
    fn test_parse_empty_header() {
        let parsed = parse_header("", "v1");

        assert_eq!(parsed.timestamp, HeaderTimestamp::Missing);
        assert!(parsed.signatures.is_empty());
    }

    #[test]
    fn test_signature_header_from_bytes() {
        let header = SignatureHeader::from(b"t=1,v1=aa".as_slice());
        assert_eq!(header, SignatureHeader::Single(Cow::Borrowed("t=1,v1=aa")));
    }

    #[test]
    fn test_signature_header_from_list() {
        let header = SignatureHeader::from(vec!["t=1", "v1=aa"]);
        assert!(matches!(header, SignatureHeader::List(values) if values.len() == 2));
    }
}
