//! Response envelope shared by every JSON handler.
//!
//! Successful bodies are always `{ "data": ... }`; errors are rendered by
//! [`AppError`](crate::error::AppError) as `{ "error": ..., "code": ... }`.

use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Wrap `data` in the envelope, ready to return from a handler.
pub fn data<T: Serialize>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data })
}
