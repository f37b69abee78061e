use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::category::CreateCategoryParams;

/// Message carried by `DbErr::RecordNotFound` when no category matches an id.
pub const CATEGORY_NOT_FOUND: &str = "category is not found";

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new category and returns it with its database-assigned id
    pub async fn save(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a category by ID
    ///
    /// A missing row is reported as `DbErr::RecordNotFound` so callers can tell it
    /// apart from every other database failure.
    pub async fn find_by_id(&self, id: i32) -> Result<entity::category::Model, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    /// Gets every category in ascending id order
    pub async fn find_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes the category's name to the row with the same id
    ///
    /// The row must exist; check with `find_by_id` first.
    pub async fn update(
        &self,
        category: entity::category::Model,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Unchanged(category.id),
            name: ActiveValue::Set(category.name),
        }
        .update(self.db)
        .await
    }

    /// Deletes the row with the category's id
    pub async fn delete(&self, category: entity::category::Model) -> Result<(), DbErr> {
        entity::prelude::Category::delete_by_id(category.id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
