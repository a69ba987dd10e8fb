//! SQLite URL handling.
//!
//! SQLite URLs are not parsed as generic URIs: `sqlite::memory:` and
//! `sqlite:relative.db` have no authority, and `sqlite:///abs/path` has an
//! empty one. The remainder after the scheme is taken as the path.
//!
//! See <https://www.sqlite.org/uri.html>

use crate::decode::percent_decode;
use crate::options::parse_options;
use crate::types::SqliteConfig;

const SCHEME_PREFIXES: [&str; 2] = ["sqlite://", "sqlite:"];

/// Returns true if `url` starts with `sqlite:`, ignoring ASCII case.
pub fn is_sqlite_url(url: &str) -> bool {
    starts_with_ignore_case(url, "sqlite:")
}

/// Extracts the database path and options from a `sqlite:` URL.
///
/// The path is percent-decoded and otherwise accepted verbatim, including
/// the empty path and `:memory:`.
pub fn extract_sqlite(url: &str) -> SqliteConfig {
    let rest = SCHEME_PREFIXES
        .iter()
        .find(|prefix| starts_with_ignore_case(url, prefix))
        .map_or(url, |prefix| &url[prefix.len()..]);

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    SqliteConfig {
        path: percent_decode(path),
        options: query.map(parse_options).unwrap_or_default(),
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
