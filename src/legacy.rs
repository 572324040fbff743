use memchr::{memchr, memchr2, memchr3, memchr_iter, memrchr};
use smallvec::SmallVec;

use crate::document::Fields;

type SegmentBuf<'a> = SmallVec<[&'a str; 16]>;

/// Classifies a parameter-override string as legacy `key=value` syntax.
///
/// Legacy requires: at least one comma-separated segment, exactly one `=`
/// in the first segment, and a `key=value` occurrence somewhere in the
/// string (an unquoted `=` with at least one preceding character and a
/// non-empty `=`-free run that reaches a comma or the end of input).
pub(crate) fn looks_like_legacy(input: &str) -> bool {
    let segments = split_segments(input);
    let Some(first) = segments.first() else {
        return false;
    };
    memchr_iter(b'=', first.as_bytes()).count() == 1 && has_pair_pattern(input)
}

/// Parses legacy syntax into a mapping, first-seen key order.
///
/// A repeated key's raw value is appended to the stored raw value joined
/// by a comma. One layer of same-character quoting is stripped from each
/// final value after all merging. Segments without `=` are skipped.
pub(crate) fn parse_legacy(input: &str) -> Fields {
    let mut fields = Fields::new();
    for segment in split_segments(input) {
        let Some((key, value)) = split_key_value(segment) else {
            continue;
        };
        match fields.get_mut(key) {
            Some(stored) => {
                stored.push(',');
                stored.push_str(value);
            }
            None => {
                fields.insert(key.to_string(), value.to_string());
            }
        }
    }
    for value in fields.values_mut() {
        if has_quote_layer(value) {
            value.pop();
            value.remove(0);
        }
    }
    fields
}

/// Splits on commas that lie outside a quoted span.
///
/// A quote character opens a span that only the same character closes;
/// commas inside a span are literal. An unterminated span runs to the end
/// of input. Segments are not trimmed here.
fn split_segments(input: &str) -> SegmentBuf<'_> {
    let mut segments = SegmentBuf::new();
    let bytes = input.as_bytes();

    if memchr2(b'"', b'\'', bytes).is_none() {
        let mut start = 0;
        for idx in memchr_iter(b',', bytes) {
            segments.push(&input[start..idx]);
            start = idx + 1;
        }
        if start < bytes.len() || input.ends_with(',') {
            segments.push(&input[start..]);
        }
        return segments;
    }

    let mut active_quote: Option<u8> = None;
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if let Some(quote) = active_quote {
            match memchr(quote, &bytes[idx..]) {
                Some(offset) => {
                    active_quote = None;
                    idx += offset + 1;
                }
                None => {
                    idx = bytes.len();
                }
            }
            continue;
        }
        match memchr3(b',', b'"', b'\'', &bytes[idx..]) {
            Some(offset) => {
                let pos = idx + offset;
                if bytes[pos] == b',' {
                    segments.push(&input[start..pos]);
                    start = pos + 1;
                    idx = start;
                } else {
                    active_quote = Some(bytes[pos]);
                    idx = pos + 1;
                }
            }
            None => break,
        }
    }

    if start < bytes.len() || input.ends_with(',') {
        segments.push(&input[start..]);
    }
    segments
}

/// Splits a segment on its first `=`, trimming key and raw value.
fn split_key_value(segment: &str) -> Option<(&str, &str)> {
    let eq = memchr(b'=', segment.as_bytes())?;
    Some((segment[..eq].trim(), segment[eq + 1..].trim()))
}

fn has_quote_layer(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
}

/// True when an unquoted `=` is preceded by at least one character and
/// followed by a non-empty `=`-free run ending at a comma or end of input.
fn has_pair_pattern(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut active_quote: Option<u8> = None;
    let mut idx = 0;

    while idx < bytes.len() {
        if let Some(quote) = active_quote {
            match memchr(quote, &bytes[idx..]) {
                Some(offset) => {
                    active_quote = None;
                    idx += offset + 1;
                }
                None => return false,
            }
            continue;
        }
        match memchr3(b'=', b'"', b'\'', &bytes[idx..]) {
            Some(offset) => {
                let pos = idx + offset;
                if bytes[pos] == b'=' {
                    if pos >= 1 && value_run_follows(&bytes[pos + 1..]) {
                        return true;
                    }
                    idx = pos + 1;
                } else {
                    active_quote = Some(bytes[pos]);
                    idx = pos + 1;
                }
            }
            None => return false,
        }
    }
    false
}

fn value_run_follows(tail: &[u8]) -> bool {
    let run_end = memchr(b'=', tail).unwrap_or(tail.len());
    if run_end == tail.len() {
        // The run reaches the end of input, so any non-empty run is a value.
        return run_end >= 1;
    }
    // The run stops at a later `=`. A prefix of the run is a value only if
    // a comma terminates it, so the last comma must sit at offset >= 1.
    matches!(memrchr(b',', &tail[..run_end]), Some(comma) if comma >= 1)
}
