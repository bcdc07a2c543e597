//! Percent-encoding of parameter values.
//!
//! Decoding applies only to captured values, never to literal segments or to
//! segment boundaries. Space encodes as `%20`, never `+`.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, PercentEncode, CONTROLS};

/// Bytes escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/');

/// Like [`SEGMENT`] but keeps `/`, so catch-all remainders round-trip.
const SUFFIX: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Bytes escaped inside a query key or value.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+');

pub(crate) fn decode(s: &str) -> Cow<'_, str> {
    percent_decode_str(s).decode_utf8_lossy()
}

pub(crate) fn encode_segment(s: &str) -> PercentEncode<'_> {
    utf8_percent_encode(s, SEGMENT)
}

pub(crate) fn encode_suffix(s: &str) -> PercentEncode<'_> {
    utf8_percent_encode(s, SUFFIX)
}

pub(crate) fn encode_query(s: &str) -> PercentEncode<'_> {
    utf8_percent_encode(s, QUERY)
}
