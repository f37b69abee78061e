//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests, DTO conversion tests, and as default values for factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let category = fixture::category::entity();
//!
//! let custom = fixture::category::entity_builder()
//!     .name("Books")
//!     .build();
//! ```

pub mod category;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
