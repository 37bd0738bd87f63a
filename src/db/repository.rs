//! Credential repository for maskcalc.
//!
//! The request path only ever reads credentials; `insert` exists for
//! provisioning and tests.

use super::{CredentialRecord, DbPool};
use crate::{MaskcalcError, Result};

/// Repository for credential lookups.
pub struct CredentialRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CredentialRepository<'a> {
    /// Create a new repository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Look up a credential record by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            "SELECT username, password_hash, salt, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        Ok(record)
    }

    /// Insert a credential record.
    pub async fn insert(&self, record: &CredentialRecord) -> Result<()> {
        sqlx::query("INSERT INTO users (username, password_hash, salt, role) VALUES (?, ?, ?, ?)")
            .bind(&record.username)
            .bind(&record.password_hash)
            .bind(&record.salt)
            .bind(&record.role)
            .execute(self.pool)
            .await
            .map_err(|e| MaskcalcError::Database(e.to_string()))?;

        Ok(())
    }
}
