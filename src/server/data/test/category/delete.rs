use super::*;

/// Tests deleting a category.
///
/// Expected: row removed, subsequent lookup reports RecordNotFound
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let id = category.id;

    let repo = CategoryRepository::new(db);
    repo.delete(category).await?;

    assert!(matches!(
        repo.find_by_id(id).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting one category leaves the others in place.
///
/// Expected: remaining category still present
#[tokio::test]
async fn deletes_only_target_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::category::create_category(db).await?;
    let other = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.delete(target).await?;

    assert_eq!(repo.find_all().await?, vec![other]);

    Ok(())
}
