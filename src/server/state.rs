//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::middleware::auth::CredentialCheck;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn CredentialCheck>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// The only process-wide shared resource. Each request opens its own
    /// transaction from this pool.
    pub db: DatabaseConnection,

    /// Credential check applied by the API key middleware.
    pub credentials: Arc<dyn CredentialCheck>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `credentials` - Credential check used to gate every request
    pub fn new(db: DatabaseConnection, credentials: Arc<dyn CredentialCheck>) -> Self {
        Self { db, credentials }
    }
}
