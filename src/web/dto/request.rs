//! Request DTOs for the Web API.

use serde::Deserialize;

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Query string for the conversion endpoints.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Value to convert. Defaults to empty when absent, which the
    /// conversion then rejects.
    #[serde(default)]
    pub value: String,
}
