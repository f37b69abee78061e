//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and transaction boundaries
//! - **Data Layer** (`data/`) - Database statements against a connection or transaction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key gate applied to every request
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (connection pool, credential check)
//! - **Startup** (`startup`) - Database connection, migrations, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Middleware** rejects requests without the configured API key
//! 2. **Router** dispatches to the matching controller
//! 3. **Controller** decodes the body, parses path parameters, calls the service
//! 4. **Service** validates, opens a transaction, calls the data layer, commits or rolls back
//! 5. **Controller** wraps the result in a `WebResponse` envelope
//! 6. Any `AppError` along the way is turned into an envelope by `AppError::into_response`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
