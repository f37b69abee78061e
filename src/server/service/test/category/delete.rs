use super::*;

/// Tests deleting a category twice.
///
/// The first delete removes the row; the second finds nothing to delete.
///
/// Expected: Ok(()) then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_once_then_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::create_category(db).await?;

    let service = CategoryService::new(db);
    service.delete(existing.id).await?;
    let second = service.delete(existing.id).await;

    assert!(matches!(second, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a nonexistent category.
///
/// Expected: Err(AppError::NotFound) and existing rows untouched
#[tokio::test]
async fn returns_not_found_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category(db).await?;

    let service = CategoryService::new(db);
    let result = service.delete(99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}
