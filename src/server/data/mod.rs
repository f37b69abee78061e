//! Database repository layer.
//!
//! Repositories issue SQL through any SeaORM `ConnectionTrait`, so the service layer can hand
//! them a `DatabaseTransaction` while tests can use a plain `DatabaseConnection`. Repositories
//! return entity models; conversion to domain models happens in the service layer.

pub mod category;


use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Finishes a transaction according to the outcome of the work done inside it.
///
/// Commits when `result` is `Ok` and rolls back when it is `Err`, returning `result`
/// unchanged either way. A failed commit replaces the result with the commit error; a
/// failed rollback is logged and the original error is kept.
pub async fn commit_or_rollback<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
