//! SQLite URL tests.

use db_url::{parse, parse_partial, DatabaseUrl, Options, PartialDatabaseUrl, SqliteConfig};
use pretty_assertions::assert_eq;

fn sqlite(path: &str) -> DatabaseUrl {
    DatabaseUrl::Sqlite(SqliteConfig {
        path: path.to_string(),
        options: Options::new(),
    })
}

#[test]
fn test_absolute_path() {
    assert_eq!(
        parse("sqlite:///absolute/path/to/db.sqlite"),
        Ok(sqlite("/absolute/path/to/db.sqlite"))
    );
}

#[test]
fn test_memory() {
    assert_eq!(parse("sqlite::memory:"), Ok(sqlite(":memory:")));
    assert_eq!(parse("SQLITE::memory:"), Ok(sqlite(":memory:")));
}

#[test]
fn test_empty_path() {
    assert_eq!(parse("sqlite:"), Ok(sqlite("")));
}

#[test]
fn test_relative_path_with_options() {
    let Ok(DatabaseUrl::Sqlite(config)) = parse("sqlite:data/app.db?mode=rwc") else {
        panic!("expected SQLite variant");
    };
    assert_eq!(config.path, "data/app.db");
    assert_eq!(config.options["mode"], "rwc");
}

#[test]
fn test_partial_is_identical() {
    assert_eq!(
        parse_partial("sqlite:///tmp/test.db"),
        Ok(PartialDatabaseUrl::Sqlite(SqliteConfig {
            path: "/tmp/test.db".to_string(),
            options: Options::new(),
        }))
    );
}

#[test]
fn test_leading_whitespace() {
    assert_eq!(parse(" sqlite::memory:"), Ok(sqlite(":memory:")));
    assert_eq!(
        parse_partial("\tsqlite:///tmp/test.db "),
        parse_partial("sqlite:///tmp/test.db")
    );
}
