use super::*;

/// Tests renaming an existing category.
///
/// Expected: Ok(Category) with the new name, later reads see the new name
#[tokio::test]
async fn updates_category_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .name("Electronic")
        .build()
        .await?;

    let service = CategoryService::new(db);
    let updated = service
        .update(UpdateCategoryParams {
            id: existing.id,
            name: "Updated Electronic".to_string(),
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Updated Electronic");
    assert_eq!(
        service.find_by_id(existing.id).await?.name,
        "Updated Electronic"
    );

    Ok(())
}

/// Tests renaming a category to an empty name.
///
/// Expected: Err(AppError::Validation) and the stored name unchanged
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::CategoryFactory::new(db)
        .name("Electronic")
        .build()
        .await?;

    let service = CategoryService::new(db);
    let result = service
        .update(UpdateCategoryParams {
            id: existing.id,
            name: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(service.find_by_id(existing.id).await?.name, "Electronic");

    Ok(())
}

/// Tests renaming a nonexistent category.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let result = service
        .update(UpdateCategoryParams {
            id: 99999,
            name: "Updated Electronic".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);

    Ok(())
}
