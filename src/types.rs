//! Parsed database URL types.
//!
//! [`DatabaseUrl`] is produced by strict parsing and always carries every
//! server field. [`PartialDatabaseUrl`] is produced by partial parsing and
//! leaves missing fields as `None`.

use crate::options::Options;
use serde::{Deserialize, Serialize};

/// Database protocols with dedicated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    PostgreSql,
    MySql,
    Other,
}

impl Protocol {
    /// Resolves a URL scheme, ignoring ASCII case.
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.eq_ignore_ascii_case("postgresql") || scheme.eq_ignore_ascii_case("postgres") {
            Self::PostgreSql
        } else if scheme.eq_ignore_ascii_case("mysql") {
            Self::MySql
        } else {
            Self::Other
        }
    }
}

/// Authentication carried in the URL userinfo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "password", rename_all = "snake_case")]
pub enum Auth {
    /// No password was given.
    #[default]
    NoAuth,
    /// Password given after the `:` in the userinfo.
    Password(String),
}

impl Auth {
    /// Returns the password, if any.
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::NoAuth => None,
            Self::Password(password) => Some(password),
        }
    }
}

/// Connection fields for a server-based database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub auth: Auth,
    pub database: String,
    #[serde(default)]
    pub options: Options,
}

/// Connection fields for a server-based database where any of host, port,
/// user and database may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub auth: Auth,
    pub database: Option<String>,
    #[serde(default)]
    pub options: Options,
}

/// SQLite database location.
///
/// `path` is taken verbatim: it may be empty (temporary database) or
/// `:memory:`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SqliteConfig {
    pub path: String,
    #[serde(default)]
    pub options: Options,
}

impl SqliteConfig {
    /// Returns true for the in-memory database.
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

/// A fully specified database URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatabaseUrl {
    PostgreSql(ServerConfig),
    MySql(ServerConfig),
    Sqlite(SqliteConfig),
    /// Any other protocol; `protocol` keeps the case used in the input.
    Other {
        protocol: String,
        #[serde(flatten)]
        config: ServerConfig,
    },
}

/// A database URL whose server fields may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PartialDatabaseUrl {
    PostgreSql(PartialServerConfig),
    MySql(PartialServerConfig),
    Sqlite(SqliteConfig),
    Other {
        protocol: String,
        #[serde(flatten)]
        config: PartialServerConfig,
    },
}

impl DatabaseUrl {
    /// Returns the protocol name: canonical for known protocols, as written
    /// for others.
    pub fn protocol(&self) -> &str {
        match self {
            Self::PostgreSql(_) => "postgresql",
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
            Self::Other { protocol, .. } => protocol,
        }
    }

    /// Returns the server fields, or `None` for SQLite.
    pub fn server(&self) -> Option<&ServerConfig> {
        match self {
            Self::PostgreSql(config) | Self::MySql(config) => Some(config),
            Self::Other { config, .. } => Some(config),
            Self::Sqlite(_) => None,
        }
    }

    /// Returns the query-string options.
    pub fn options(&self) -> &Options {
        match self {
            Self::Sqlite(config) => &config.options,
            Self::PostgreSql(config) | Self::MySql(config) => &config.options,
            Self::Other { config, .. } => &config.options,
        }
    }
}

impl PartialDatabaseUrl {
    /// Returns the protocol name: canonical for known protocols, as written
    /// for others.
    pub fn protocol(&self) -> &str {
        match self {
            Self::PostgreSql(_) => "postgresql",
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
            Self::Other { protocol, .. } => protocol,
        }
    }

    /// Returns the server fields, or `None` for SQLite.
    pub fn server(&self) -> Option<&PartialServerConfig> {
        match self {
            Self::PostgreSql(config) | Self::MySql(config) => Some(config),
            Self::Other { config, .. } => Some(config),
            Self::Sqlite(_) => None,
        }
    }

    /// Returns the query-string options.
    pub fn options(&self) -> &Options {
        match self {
            Self::Sqlite(config) => &config.options,
            Self::PostgreSql(config) | Self::MySql(config) => &config.options,
            Self::Other { config, .. } => &config.options,
        }
    }
}

impl From<ServerConfig> for PartialServerConfig {
    fn from(config: ServerConfig) -> Self {
        Self {
            host: Some(config.host),
            port: Some(config.port),
            user: Some(config.user),
            auth: config.auth,
            database: Some(config.database),
            options: config.options,
        }
    }
}

impl From<DatabaseUrl> for PartialDatabaseUrl {
    fn from(url: DatabaseUrl) -> Self {
        match url {
            DatabaseUrl::PostgreSql(config) => Self::PostgreSql(config.into()),
            DatabaseUrl::MySql(config) => Self::MySql(config.into()),
            DatabaseUrl::Sqlite(config) => Self::Sqlite(config),
            DatabaseUrl::Other { protocol, config } => Self::Other {
                protocol,
                config: config.into(),
            },
        }
    }
}
