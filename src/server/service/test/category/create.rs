use super::*;

/// Tests creating a category with a valid name.
///
/// Expected: Ok(Category) with a fresh id, row committed
#[tokio::test]
async fn creates_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let category = service
        .create(CreateCategoryParams {
            name: "Electronic".to_string(),
        })
        .await?;

    assert!(category.id > 0);
    assert_eq!(category.name, "Electronic");
    assert_eq!(service.find_by_id(category.id).await?, category);

    Ok(())
}

/// Tests creating a category with an empty name.
///
/// Invalid create requests are answered with an empty category instead of an
/// error, and nothing is written.
///
/// Expected: Ok(Category::default()) and an empty table
#[tokio::test]
async fn returns_empty_category_for_invalid_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let category = service
        .create(CreateCategoryParams {
            name: String::new(),
        })
        .await?;

    assert_eq!(category, Category::default());
    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);

    Ok(())
}

/// Tests that every created category receives a previously unused id.
///
/// Expected: three distinct ids
#[tokio::test]
async fn assigns_unused_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let mut ids = Vec::new();
    for name in ["Electronic", "Books", "Garden"] {
        let category = service
            .create(CreateCategoryParams {
                name: name.to_string(),
            })
            .await?;
        assert!(!ids.contains(&category.id));
        ids.push(category.id);
    }

    Ok(())
}
