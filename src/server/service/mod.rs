//! Business logic layer.
//!
//! Services sit between controllers and repositories. They validate parameters, open one
//! transaction per operation, translate missing rows into `AppError::NotFound`, and convert
//! entity models into domain models.

pub mod category;
