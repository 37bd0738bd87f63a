//! Credential verification for maskcalc.
//!
//! Stored credentials are lowercase-hex SHA-512 digests of the plaintext
//! password with a per-user salt appended.

use sha2::{Digest, Sha512};
use thiserror::Error;

use crate::db::CredentialRepository;

/// Credential verification errors.
///
/// `UserNotFound` and `InvalidCredentials` are kept distinct for
/// server-side diagnostics; callers must collapse them into a single
/// unauthorized outcome before answering the client.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// No record exists for the username.
    #[error("user not found")]
    UserNotFound,

    /// The candidate password does not match the stored hash.
    #[error("invalid combination of username and password")]
    InvalidCredentials,

    /// The user store lookup failed.
    #[error("credential store error: {0}")]
    Store(String),
}

/// Digest a password with its salt, rendered as lowercase hex.
///
/// The salt is appended to the password, matching how credential records
/// are created.
pub fn salted_hash(password: &str, salt: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a username/password pair against the credential store.
///
/// Performs exactly one store lookup and no mutation. On success returns
/// the stored role.
pub async fn verify_credentials(
    repo: &CredentialRepository<'_>,
    username: &str,
    password: &str,
) -> Result<String, CredentialError> {
    let record = repo
        .get_by_username(username)
        .await
        .map_err(|e| CredentialError::Store(e.to_string()))?
        .ok_or(CredentialError::UserNotFound)?;

    if salted_hash(password, &record.salt) == record.password_hash {
        Ok(record.role)
    } else {
        Err(CredentialError::InvalidCredentials)
    }
}
