//! Database module for maskcalc.
//!
//! This module provides connectivity to the user-credential store and
//! migration management. SQLite is the default backend; the `mysql`
//! feature switches the pool to MySQL.

mod credential;
mod repository;
mod schema;

pub use credential::CredentialRecord;
pub use repository::CredentialRepository;
pub use schema::MIGRATIONS;

use tracing::{debug, info};

use crate::{MaskcalcError, Result};

/// Connection pool type for the selected backend.
#[cfg(feature = "sqlite")]
pub type DbPool = sqlx::SqlitePool;
#[cfg(all(feature = "mysql", not(feature = "sqlite")))]
pub type DbPool = sqlx::MySqlPool;

/// Database wrapper for managing the connection pool and migrations.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Connect using a database URL and apply pending migrations.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to credential store");

        #[cfg(feature = "sqlite")]
        let pool = {
            use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
            use std::str::FromStr;

            let options = SqliteConnectOptions::from_str(url)
                .map_err(|e| MaskcalcError::Database(e.to_string()))?
                .create_if_missing(true);
            SqlitePoolOptions::new()
                .connect_with(options)
                .await
                .map_err(|e| MaskcalcError::Database(e.to_string()))?
        };

        #[cfg(all(feature = "mysql", not(feature = "sqlite")))]
        let pool = DbPool::connect(url)
            .await
            .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    #[cfg(feature = "sqlite")]
    pub async fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");

        use sqlx::sqlite::SqlitePoolOptions;

        // A single connection keeps every query on the same in-memory
        // database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        Ok(version)
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)")
            .execute(&self.pool)
            .await
            .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        let current = self.schema_version().await?;

        for (index, migration) in MIGRATIONS.iter().enumerate() {
            let version = (index + 1) as i64;
            if version <= current {
                continue;
            }

            debug!("Applying migration v{}", version);
            sqlx::raw_sql(migration)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    MaskcalcError::Database(format!("migration v{version} failed: {e}"))
                })?;
            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(version)
                .execute(&self.pool)
                .await
                .map_err(|e| MaskcalcError::Database(e.to_string()))?;
        }

        let latest = MIGRATIONS.len() as i64;
        if current < latest {
            info!("Credential store migrated to v{}", latest);
        }

        Ok(())
    }
}
