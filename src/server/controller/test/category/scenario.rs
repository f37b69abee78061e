use super::*;

/// Create, read, rename, read, delete, read against the full router.
#[tokio::test]
async fn runs_full_category_lifecycle() {
    let (server, _db) = test_server().await;

    let created = server
        .post("/api/categories")
        .add_header("X-API-Key", TEST_API_KEY)
        .json(&json!({ "name": "Electronic" }))
        .await;
    created.assert_status_ok();
    let created = created.json::<WebResponse<CategoryDto>>().data.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Electronic");
    let path = format!("/api/categories/{}", created.id);

    let fetched = server
        .get(&path)
        .add_header("X-API-Key", TEST_API_KEY)
        .await;
    fetched.assert_status_ok();
    assert_eq!(
        fetched.json::<WebResponse<CategoryDto>>().data.unwrap().name,
        "Electronic"
    );

    let updated = server
        .put(&path)
        .add_header("X-API-Key", TEST_API_KEY)
        .json(&json!({ "name": "Updated Electronic" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(
        updated.json::<WebResponse<CategoryDto>>().data.unwrap().name,
        "Updated Electronic"
    );

    let refetched = server
        .get(&path)
        .add_header("X-API-Key", TEST_API_KEY)
        .await;
    assert_eq!(
        refetched.json::<WebResponse<CategoryDto>>().data.unwrap().name,
        "Updated Electronic"
    );

    server
        .delete(&path)
        .add_header("X-API-Key", TEST_API_KEY)
        .await
        .assert_status_ok();

    server
        .get(&path)
        .add_header("X-API-Key", TEST_API_KEY)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
