//! # Request Validation
//!
//! Business-rule validation for request DTOs, on top of what serde
//! deserialization already enforces.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Business-rule validation for a request body.
pub trait Validate {
    /// Check invariants serde cannot express. Returns a message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON extraction, mapping parse failures to 400.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(value)| value)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Unwrap a JSON extraction and run [`Validate`], mapping rule
/// violations to 422.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}
