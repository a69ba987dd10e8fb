//! db-url - parse database connection URLs into structured configuration.
//!
//! [`parse`] requires every server field (host, port, user, database);
//! [`parse_partial`] leaves missing ones as `None`. SQLite URLs are handled
//! separately from generic URIs so that `sqlite::memory:` and
//! `sqlite:relative.db` work.

pub mod config;
pub mod decode;
pub mod error;
pub mod options;
pub mod sqlite;
pub mod types;

mod parse;
mod render;
mod server;
mod uri;

pub use error::ParseError;
pub use options::Options;
pub use parse::{parse, parse_partial};
pub use types::{
    Auth, DatabaseUrl, PartialDatabaseUrl, PartialServerConfig, Protocol, ServerConfig,
    SqliteConfig,
};
