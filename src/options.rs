//! Query-string to connection options mapping.

use crate::decode::decode_cow;
use std::collections::BTreeMap;

/// Connection options taken from a URL query string, ordered by key.
pub type Options = BTreeMap<String, String>;

/// Parses `key=value&key2=value2` into [`Options`].
///
/// A parameter without `=` maps to an empty value. Keys and values are
/// percent-decoded; a repeated key keeps its last value.
pub fn parse_options(query: &str) -> Options {
    let mut options = Options::new();

    for param in query.split('&').filter(|param| !param.is_empty()) {
        let (key, value) = match param.split_once('=') {
            Some((key, value)) => (decode_cow(key), decode_cow(value)),
            None => (decode_cow(param), "".into()),
        };
        options.insert(key.into_owned(), value.into_owned());
    }

    options
}
