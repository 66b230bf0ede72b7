#![forbid(unsafe_code)]

//! Host element attribute access.
//!
//! Grab bars are rendered by the host with an `idx` attribute naming the
//! bar. The drag pipeline reads it back on pointer-down through
//! [`AttributeSource`], so any element model with string attributes can be
//! plugged in.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Attribute name carrying a grab bar's index.
pub const BAR_INDEX_ATTRIBUTE: &str = "idx";

/// Read-only string attribute lookup.
pub trait AttributeSource {
    fn attribute(&self, key: &str) -> Option<&str>;
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<A: AttributeSource + ?Sized> AttributeSource for &A {
    fn attribute(&self, key: &str) -> Option<&str> {
        (**self).attribute(key)
    }
}

/// Parse an integer attribute, returning `None` when it is absent or does
/// not start with a number.
///
/// Parsing takes the integer prefix: leading whitespace is skipped, one
/// optional sign is accepted, and the longest run of ASCII digits that
/// follows is used. `"12px"` parses as `12`; `"px12"` does not parse.
pub fn parse_integer_attribute<A>(source: &A, key: &str) -> Option<i64>
where
    A: AttributeSource + ?Sized,
{
    source.attribute(key).and_then(parse_integer_prefix)
}

fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
