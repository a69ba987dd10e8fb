//! Integration tests for db-url.
//!
//! Exercise the public parsing API end to end.

pub mod config_test;
pub mod partial_test;
pub mod sqlite_test;
