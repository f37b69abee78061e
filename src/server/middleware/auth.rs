use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Decides whether the credential presented with a request is acceptable.
///
/// Held in `AppState` as a trait object so the gate can be swapped without
/// touching routing.
pub trait CredentialCheck: Send + Sync {
    /// Verifies the raw `X-API-Key` header value, `None` when the header is absent.
    fn verify(&self, presented: Option<&str>) -> Result<(), AuthError>;
}

/// Accepts exactly one static secret, compared in constant time.
pub struct StaticApiKey {
    secret: String,
}

impl StaticApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for StaticApiKey {
    fn verify(&self, presented: Option<&str>) -> Result<(), AuthError> {
        let Some(presented) = presented else {
            return Err(AuthError::MissingApiKey);
        };

        if bool::from(presented.as_bytes().ct_eq(self.secret.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}

/// Middleware rejecting every request that lacks a valid API key.
///
/// Runs before routing, so unauthenticated requests never reach a handler and
/// never touch the database.
///
/// # Returns
/// - The downstream response when the key is accepted
/// - `Err(AppError::AuthErr(_))` - 401 Unauthorized otherwise
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let verified = match request.headers().get(API_KEY_HEADER) {
        Some(value) => match value.to_str() {
            Ok(presented) => state.credentials.verify(Some(presented)),
            Err(_) => Err(AuthError::InvalidApiKey),
        },
        None => state.credentials.verify(None),
    };

    if let Err(err) = verified {
        tracing::warn!(path = %request.uri().path(), "Rejected request: {}", err);
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
