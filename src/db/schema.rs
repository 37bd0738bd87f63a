//! Database schema and migrations for maskcalc.

/// Database migrations.
///
/// Each migration is a SQL script executed in order; the schema_version
/// table tracks which have been applied.
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: users table (credential records)
    r#"
CREATE TABLE users (
    username      TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,      -- lowercase-hex SHA-512 of password + salt
    salt          TEXT NOT NULL,
    role          TEXT NOT NULL
);
"#,
];

/// Database migrations (MySQL backend).
#[cfg(all(feature = "mysql", not(feature = "sqlite")))]
pub const MIGRATIONS: &[&str] = &[
    // v1: users table (credential records)
    r#"
CREATE TABLE users (
    username      VARCHAR(64) PRIMARY KEY,
    password_hash VARCHAR(128) NOT NULL,
    salt          VARCHAR(64) NOT NULL,
    role          VARCHAR(32) NOT NULL
);
"#,
];
