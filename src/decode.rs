//! Best-effort percent-decoding of URL components.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Decodes `%XX` escapes in `input`.
///
/// Returns the input unchanged when any `%` is not followed by two hex
/// digits, or when the decoded bytes are not valid UTF-8.
pub fn percent_decode(input: &str) -> String {
    decode_cow(input).into_owned()
}

pub(crate) fn decode_cow(input: &str) -> Cow<'_, str> {
    if !has_well_formed_escapes(input) {
        return Cow::Borrowed(input);
    }

    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(input),
    }
}

fn has_well_formed_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
