use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::api::WebResponse;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no `X-API-Key` header.
    #[error("Request is missing the X-API-Key header")]
    MissingApiKey,

    /// The `X-API-Key` header did not match the configured secret.
    #[error("Request presented an invalid API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with an envelope that carries no
/// data, so callers cannot tell a missing key from a wrong one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        WebResponse::<()>::empty(StatusCode::UNAUTHORIZED).into_response()
    }
}
