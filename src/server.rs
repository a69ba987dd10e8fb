//! Field extraction for server-based databases (PostgreSQL, MySQL, others).

use crate::decode::percent_decode;
use crate::error::ParseError;
use crate::options::{parse_options, Options};
use crate::types::{Auth, PartialServerConfig, ServerConfig};
use crate::uri::UriParts;

/// Extracts every field, failing on the first one missing.
///
/// Checks run in a fixed order: host, port, user, database.
pub(crate) fn extract_strict(parts: &UriParts) -> Result<ServerConfig, ParseError> {
    if parts.host.is_empty() {
        return Err(ParseError::InvalidHost(String::new()));
    }
    let port = parts.port.ok_or(ParseError::MissingPort)?;

    let (user, auth) = parts
        .userinfo
        .as_deref()
        .map(split_userinfo)
        .ok_or(ParseError::MissingUser)?;
    if user.is_empty() {
        return Err(ParseError::MissingUser);
    }

    let database = database(&parts.path).ok_or(ParseError::MissingDatabase)?;

    Ok(ServerConfig {
        host: parts.host.clone(),
        port,
        user,
        auth,
        database,
        options: options(parts),
    })
}

/// Extracts whatever fields are present.
pub(crate) fn extract_partial(parts: &UriParts) -> PartialServerConfig {
    let host = Some(parts.host.clone()).filter(|host| !host.is_empty());

    let (user, auth) = match parts.userinfo.as_deref().map(split_userinfo) {
        Some((user, auth)) => (Some(user), auth),
        None => (None, Auth::NoAuth),
    };

    PartialServerConfig {
        host,
        port: parts.port,
        user,
        auth,
        database: database(&parts.path),
        options: options(parts),
    }
}

/// Splits `user[:password]` on the first `:`.
fn split_userinfo(userinfo: &str) -> (String, Auth) {
    match userinfo.split_once(':') {
        Some((user, password)) => (
            percent_decode(user),
            Auth::Password(percent_decode(password)),
        ),
        None => (percent_decode(userinfo), Auth::NoAuth),
    }
}

/// Database name from the path, minus one leading `/`.
fn database(path: &str) -> Option<String> {
    let name = percent_decode(path.strip_prefix('/').unwrap_or(path));
    Some(name).filter(|name| !name.is_empty())
}

fn options(parts: &UriParts) -> Options {
    parts.query.as_deref().map(parse_options).unwrap_or_default()
}
