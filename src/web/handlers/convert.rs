//! Token-gated mask/CIDR conversion handlers.

use axum::extract::Query;
use axum::Json;

use crate::netmask;
use crate::web::dto::{ConversionResponse, ConvertQuery};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// GET /mask-to-cidr - dotted-quad mask to prefix length.
pub async fn mask_to_cidr(
    AuthUser(_claims): AuthUser,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let prefix_len = netmask::mask_to_prefix_len(&query.value)
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    Ok(Json(ConversionResponse {
        function: "maskToCidr".to_string(),
        input: query.value,
        output: prefix_len.to_string(),
    }))
}

/// GET /cidr-to-mask - prefix length to dotted-quad mask.
pub async fn cidr_to_mask(
    AuthUser(_claims): AuthUser,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let mask = netmask::prefix_len_to_mask(&query.value)
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    Ok(Json(ConversionResponse {
        function: "cidrToMask".to_string(),
        input: query.value,
        output: mask.to_string(),
    }))
}
