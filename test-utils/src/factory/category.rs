//! Category factory for creating persisted test category entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// Defaults are sourced from the category fixture, with a unique name per
/// factory so tests creating several categories can tell them apart.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .name("Electronic")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    entity: entity::category::Model,
}

impl<'a, C: ConnectionTrait> CategoryFactory<'a, C> {
    /// Creates a new CategoryFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction used for inserting the entity
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        let entity = fixture::category::entity_builder()
            .name(format!("Category {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// The id is left for the database to assign.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
