//! Credential record for the user store.

/// A stored credential row: everything needed to verify one login.
///
/// The service never mutates these records; they are provisioned out of
/// band.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    /// Login username (unique).
    pub username: String,
    /// Lowercase-hex SHA-512 digest of the password with the salt
    /// appended.
    pub password_hash: String,
    /// Per-user salt.
    pub salt: String,
    /// Authorization role (e.g. "admin", "viewer").
    pub role: String,
}
