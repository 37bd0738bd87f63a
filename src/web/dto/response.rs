//! Response DTOs for the Web API.

use serde::Serialize;

/// Login response: the issued token plus the role it encodes.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Role stored for the user.
    pub role: String,
    /// Signed session token.
    pub token: String,
}

/// Conversion result echoing the operation and its input.
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    /// Operation name.
    pub function: String,
    /// Raw input value.
    pub input: String,
    /// Converted output value.
    pub output: String,
}
