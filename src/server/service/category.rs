use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use validator::Validate;

use crate::server::{
    data::{category::CategoryRepository, commit_or_rollback},
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category
    ///
    /// Invalid parameters are not reported: the caller receives an empty
    /// `Category` and nothing is written. `update` reports the same failure as
    /// `AppError::Validation`; clients depend on both behaviors.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        if let Err(errors) = params.validate() {
            tracing::debug!("Ignoring invalid category create request: {}", errors);
            return Ok(Category::default());
        }

        let txn = self.db.begin().await?;

        let result = async {
            let repo = CategoryRepository::new(&txn);

            let category = repo.save(params).await?;

            Ok::<_, AppError>(Category::from_entity(category))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Renames an existing category
    ///
    /// # Returns
    /// - `Ok(Category)` - The updated category
    /// - `Err(AppError::Validation)` - Name is empty
    /// - `Err(AppError::NotFound)` - No category with `params.id`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let result = async {
            let repo = CategoryRepository::new(&txn);

            let mut category = repo.find_by_id(params.id).await.map_err(not_found)?;
            category.name = params.name;

            let category = repo.update(category).await?;

            Ok::<_, AppError>(Category::from_entity(category))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Deletes a category
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            let repo = CategoryRepository::new(&txn);

            let category = repo.find_by_id(id).await.map_err(not_found)?;

            repo.delete(category).await?;

            Ok::<_, AppError>(())
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Gets a specific category by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            let repo = CategoryRepository::new(&txn);

            let category = repo.find_by_id(id).await.map_err(not_found)?;

            Ok::<_, AppError>(Category::from_entity(category))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Gets all categories in id order
    pub async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            let repo = CategoryRepository::new(&txn);

            let categories: Vec<Category> = repo
                .find_all()
                .await?
                .into_iter()
                .map(Category::from_entity)
                .collect();

            Ok::<_, AppError>(categories)
        }
        .await;

        commit_or_rollback(txn, result).await
    }
}

/// Reclassifies a missing row as `AppError::NotFound`; every other database error stays fatal.
fn not_found(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
        err => AppError::DbErr(err),
    }
}
