//! Rendering parsed URLs back to strings.

use crate::options::Options;
use crate::types::{Auth, DatabaseUrl, PartialDatabaseUrl, ServerConfig, SqliteConfig};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Userinfo: everything but RFC 3986 unreserved characters.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Paths keep `/` but escape what would end the path or start an escape.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const QUERY_COMPONENT: &AsciiSet = &PATH.add(b'&').add(b'=').add(b'+');

impl DatabaseUrl {
    /// Renders a URL that parses back to this value.
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Sqlite(config) => sqlite_string(config),
            Self::PostgreSql(config) | Self::MySql(config) => server_string(self.protocol(), config),
            Self::Other { protocol, config } => server_string(protocol, config),
        }
    }

    /// Returns a display-safe string (no password) for logs and output.
    pub fn display_string(&self) -> String {
        match self {
            Self::Sqlite(config) => sqlite_display(config),
            Self::PostgreSql(config) | Self::MySql(config) => {
                format!("{} @ {}:{} ({})", config.database, config.host, config.port, self.protocol())
            }
            Self::Other { protocol, config } => {
                format!("{} @ {}:{} ({protocol})", config.database, config.host, config.port)
            }
        }
    }
}

impl PartialDatabaseUrl {
    /// Returns a display-safe string (no password); missing fields show as `?`.
    pub fn display_string(&self) -> String {
        let Some(config) = self.server() else {
            return match self {
                Self::Sqlite(config) => sqlite_display(config),
                _ => String::new(),
            };
        };

        let database = config.database.as_deref().unwrap_or("?");
        let host = config.host.as_deref().unwrap_or("?");
        let port = config
            .port
            .map_or_else(|| "?".to_string(), |port| port.to_string());
        format!("{database} @ {host}:{port} ({})", self.protocol())
    }
}

fn server_string(protocol: &str, config: &ServerConfig) -> String {
    let mut conn_str = format!("{protocol}://");

    conn_str.extend(utf8_percent_encode(&config.user, USERINFO));
    if let Auth::Password(password) = &config.auth {
        conn_str.push(':');
        conn_str.extend(utf8_percent_encode(password, USERINFO));
    }
    conn_str.push('@');

    conn_str.push_str(&config.host);
    conn_str.push(':');
    conn_str.push_str(&config.port.to_string());
    conn_str.push('/');
    conn_str.extend(utf8_percent_encode(&config.database, PATH));
    push_options(&mut conn_str, &config.options);

    conn_str
}

fn sqlite_string(config: &SqliteConfig) -> String {
    let mut conn_str = String::from("sqlite://");
    conn_str.extend(utf8_percent_encode(&config.path, PATH));
    push_options(&mut conn_str, &config.options);
    conn_str
}

fn sqlite_display(config: &SqliteConfig) -> String {
    if config.path.is_empty() {
        "sqlite: (temporary)".to_string()
    } else {
        format!("sqlite: {}", config.path)
    }
}

fn push_options(conn_str: &mut String, options: &Options) {
    for (i, (key, value)) in options.iter().enumerate() {
        conn_str.push(if i == 0 { '?' } else { '&' });
        conn_str.extend(utf8_percent_encode(key, QUERY_COMPONENT));
        conn_str.push('=');
        conn_str.extend(utf8_percent_encode(value, QUERY_COMPONENT));
    }
}
