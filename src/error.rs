//! Error types for db-url.
//!
//! [`ParseError`] is the closed set of reasons a URL can be rejected.
//! [`Error`] wraps it for the configuration and command-line layers.

use thiserror::Error;

/// Reasons a database URL fails to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The host component was rejected (carries the host as written).
    #[error("invalid host: '{0}'")]
    InvalidHost(String),

    /// The port component was rejected (carries the port as written).
    #[error("invalid port: '{0}'")]
    InvalidPort(String),

    /// The input is not a well-formed URI.
    #[error("invalid URI")]
    InvalidUri,

    /// No database name in the URL path.
    #[error("missing database name")]
    MissingDatabase,

    /// No port in the URL authority.
    #[error("missing port")]
    MissingPort,

    /// No user in the URL authority.
    #[error("missing user")]
    MissingUser,

    /// The URL has no scheme.
    #[error("missing protocol")]
    MissingProtocol,

    /// The URL has no scheme and authority section.
    #[error("relative URL (expected protocol://host)")]
    RelativeUrl,
}

/// Main error type for configuration and CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (unreadable config file, unknown connection, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output errors (serialization or writing results).
    #[error("Output error: {0}")]
    Output(String),

    /// A database URL could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an output error with the given message.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Output(_) => "Output Error",
            Self::Parse(_) => "Parse Error",
        }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
