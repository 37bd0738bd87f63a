//! Session token issuance and verification.
//!
//! Tokens are JWTs signed with a shared symmetric secret. The claim set
//! carries the role granted at login; issued tokens have no expiry, but
//! an `exp` claim is honored when a token presents one. Verification is
//! stateless: a pure signature check, no server-side session storage.

use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signing algorithms accepted on verification (the HMAC family).
const HMAC_ALGORITHMS: &[Algorithm] = &[Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authorization role granted at login.
    pub role: String,
    /// Expiry timestamp in seconds since the epoch. Not set on issued
    /// tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Token verification and signing errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// No token was supplied.
    #[error("missing token")]
    Missing,

    /// The token's signing algorithm is outside the HMAC family.
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,

    /// The signature does not verify against the shared secret.
    #[error("invalid signature")]
    InvalidSignature,

    /// The token carries an expiry claim that has passed.
    #[error("token expired")]
    Expired,

    /// The token is not a structurally valid JWT.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signing failed. The only server-side fault in this module.
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Issues and verifies session tokens with a shared symmetric secret.
///
/// Constructed once at startup from configuration and shared by
/// reference; the secret is never consulted through a global.
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuthority {
    /// Create a token authority from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        // Issued tokens carry no expiry claim, so `exp` must not be
        // required; it is still validated when present.
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed token carrying the given role.
    pub fn issue(&self, role: &str) -> Result<String, TokenError> {
        let claims = Claims {
            role: role.to_string(),
            exp: None,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token string and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        // Reject foreign algorithms before touching the signature.
        let header = decode_header(token).map_err(|e| TokenError::Malformed(e.to_string()))?;
        if !HMAC_ALGORITHMS.contains(&header.alg) {
            return Err(TokenError::UnsupportedAlgorithm);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnsupportedAlgorithm
                }
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        Ok(data.claims)
    }
}
