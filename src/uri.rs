//! Generic URI decomposition on top of the `url` crate.
//!
//! `url` validates the input and decides whether it has an authority. The
//! components themselves are sliced from the input as written: `url`
//! lowercases schemes and special-scheme hosts, folds default ports, drops
//! empty passwords and removes dot-segments from paths.

use crate::error::ParseError;
use url::Url;

/// Schemes `url` parses with relaxed slashes and backslash separators.
const SPECIAL_SCHEMES: [&str; 5] = ["http", "https", "ws", "wss", "ftp"];

/// Components of an absolute URI with an authority section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UriParts {
    pub protocol: Option<String>,
    pub userinfo: Option<String>,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Decomposed {
    Absolute(UriParts),
    Relative,
}

/// Splits `input` into URI components.
///
/// Errors are limited to `InvalidUri`, `InvalidPort` and `InvalidHost`.
pub(crate) fn decompose(input: &str) -> Result<Decomposed, ParseError> {
    let trimmed = trim_c0(input);
    if trimmed.is_empty() {
        return Err(ParseError::InvalidUri);
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => return Ok(Decomposed::Relative),
        Err(err) => return Err(classify(err, trimmed)),
    };

    if !url.has_authority() {
        return Ok(Decomposed::Relative);
    }
    // `file:/path` has an empty authority for `url` but none as written.
    let Some(raw) = RawUri::find(trimmed) else {
        return Ok(Decomposed::Relative);
    };

    let protocol = Some(original_scheme(trimmed, url.scheme())).filter(|s| !s.is_empty());
    let port = url.port().or_else(|| raw.port?.parse().ok());

    Ok(Decomposed::Absolute(UriParts {
        protocol,
        userinfo: raw.userinfo.filter(|u| !u.is_empty()).map(String::from),
        host: raw.host.to_string(),
        port,
        path: raw.path.to_string(),
        query: raw.query.map(String::from),
        fragment: raw.fragment.map(String::from),
    }))
}

/// `Url::parse` ignores leading and trailing C0 controls and spaces.
pub(crate) fn trim_c0(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// Returns the scheme exactly as written in `input`.
fn original_scheme(input: &str, normalized: &str) -> String {
    input
        .get(..normalized.len())
        .filter(|written| written.eq_ignore_ascii_case(normalized))
        .unwrap_or(normalized)
        .to_string()
}

fn classify(err: url::ParseError, input: &str) -> ParseError {
    let raw = RawUri::find(input);
    match err {
        url::ParseError::InvalidPort => {
            let port = raw.and_then(|raw| raw.port).unwrap_or_default();
            ParseError::InvalidPort(port.to_string())
        }
        url::ParseError::EmptyHost
        | url::ParseError::IdnaError
        | url::ParseError::InvalidIpv4Address
        | url::ParseError::InvalidIpv6Address
        | url::ParseError::InvalidDomainCharacter => {
            let host = raw.map(|raw| raw.host).unwrap_or_default();
            ParseError::InvalidHost(host.to_string())
        }
        _ => ParseError::InvalidUri,
    }
}

/// Components of an authority-based URI, as written.
#[derive(Debug, PartialEq, Eq)]
struct RawUri<'a> {
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> RawUri<'a> {
    /// Returns `None` when `input` has no `//` authority section.
    fn find(input: &'a str) -> Option<Self> {
        let (scheme, rest) = input.split_once(':')?;
        let special = SPECIAL_SCHEMES
            .iter()
            .any(|name| scheme.eq_ignore_ascii_case(name));

        let rest = if special {
            rest.trim_start_matches(['/', '\\'])
        } else {
            rest.strip_prefix("//")?
        };

        let end = rest
            .find(|c: char| matches!(c, '/' | '?' | '#') || (special && c == '\\'))
            .unwrap_or(rest.len());
        let (authority, after) = rest.split_at(end);

        let (userinfo, host_port) = match authority.rsplit_once('@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, authority),
        };

        let (host, port) = if host_port.starts_with('[') {
            match host_port.split_once(']') {
                Some((host, after)) => (&host_port[..host.len() + 1], after.strip_prefix(':')),
                None => (host_port, None),
            }
        } else {
            match host_port.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (host_port, None),
            }
        };

        let (before_fragment, fragment) = match after.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (after, None),
        };
        let (path, query) = match before_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (before_fragment, None),
        };

        Some(Self {
            userinfo,
            host,
            port,
            path,
            query,
            fragment,
        })
    }
}
