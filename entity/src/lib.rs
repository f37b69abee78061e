//! SeaORM entity definitions for the category API.

pub mod category;
pub mod prelude;
