/// Request extractors
use crate::error::ServerError;
use axum::extract::{FromRequest, FromRequestParts};

/// `Json` extractor whose rejection is a `ServerError::BadRequest`
///
/// Malformed bodies and missing fields get the same `{"message": ...}`
/// shape as every other client error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor with the same rejection as [`ApiJson`]
///
/// An id segment that does not parse (`/api/user/abc`) is a 400 with a JSON
/// `message`, not axum's plain-text rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServerError))]
pub struct ApiPath<T>(pub T);

/// Reject blank required string fields
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}
