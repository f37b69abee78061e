//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let category = factory::category::create_category(&db).await?;
//!     let books = factory::category::CategoryFactory::new(&db)
//!         .name("Books")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod helpers;
