use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform envelope wrapping every API response.
///
/// `data` carries the payload on success, an error detail string on failure,
/// and `null` for pure-status responses such as 401.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    /// Builds an envelope whose `code` and `status` mirror the HTTP status.
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            data,
        }
    }

    /// `200 OK` envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, Some(data))
    }

    /// Envelope without a payload.
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

/// Writes the envelope as JSON with an HTTP status matching `code`.
impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
