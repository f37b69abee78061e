use super::*;

/// Tests getting a category by ID.
///
/// Expected: Ok(Category) matching the stored row
#[tokio::test]
async fn finds_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .name("Books")
        .build()
        .await?;

    let service = CategoryService::new(db);
    let category = service.find_by_id(existing.id).await?;

    assert_eq!(
        category,
        Category {
            id: existing.id,
            name: "Books".to_string()
        }
    );

    Ok(())
}

/// Tests getting a nonexistent category.
///
/// Verifies the repository's missing-row error is surfaced as a domain
/// not-found error carrying the lookup message.
///
/// Expected: Err(AppError::NotFound("category is not found"))
#[tokio::test]
async fn returns_not_found_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let result = service.find_by_id(99999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "category is not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    Ok(())
}
