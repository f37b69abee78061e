//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into `WebResponse` envelopes. `AppError` is the single
//! translation point: every handler and middleware returns it, and its
//! `IntoResponse` impl classifies the failure in a fixed order.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::WebResponse,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error raised by the API key gate.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal failure such as an unparsable path id.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request failed field validation.
    ///
    /// Results in 400 Bad Request with the formatted violations as data.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Request body could not be decoded as the expected JSON.
    ///
    /// Results in 400 Bad Request with the decoder's message as data.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// Classification order:
/// - 404 Not Found - `NotFound`
/// - 400 Bad Request - `Validation`, `JsonRejection`
/// - 401 Unauthorized - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => WebResponse::new(StatusCode::NOT_FOUND, Some(msg)).into_response(),
            Self::Validation(errors) => {
                WebResponse::new(StatusCode::BAD_REQUEST, Some(errors.to_string())).into_response()
            }
            Self::JsonRejection(rejection) => {
                WebResponse::new(StatusCode::BAD_REQUEST, Some(rejection.body_text()))
                    .into_response()
            }
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its message as the envelope's data.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        WebResponse::new(StatusCode::INTERNAL_SERVER_ERROR, Some(self.0.to_string()))
            .into_response()
    }
}
