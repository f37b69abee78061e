use super::*;

#[tokio::test]
async fn lists_all_categories() {
    let (server, db) = test_server().await;
    let first = factory::category::create_category(&db).await.unwrap();
    let second = factory::category::create_category(&db).await.unwrap();

    let response = server
        .get("/api/categories")
        .add_header("X-API-Key", TEST_API_KEY)
        .await;

    response.assert_status_ok();
    let body = response.json::<WebResponse<Vec<CategoryDto>>>();
    assert_eq!(
        body.data.unwrap(),
        vec![
            CategoryDto {
                id: first.id,
                name: first.name
            },
            CategoryDto {
                id: second.id,
                name: second.name
            },
        ]
    );
}

#[tokio::test]
async fn gets_category_by_id() {
    let (server, db) = test_server().await;
    let existing = factory::category::CategoryFactory::new(&db)
        .name("Books")
        .build()
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/categories/{}", existing.id))
        .add_header("X-API-Key", TEST_API_KEY)
        .await;

    response.assert_status_ok();
    let body = response.json::<WebResponse<CategoryDto>>();
    assert_eq!(
        body.data,
        Some(CategoryDto {
            id: existing.id,
            name: "Books".to_string()
        })
    );
}

#[tokio::test]
async fn returns_not_found_for_missing_category() {
    let (server, _db) = test_server().await;

    let response = server
        .get("/api/categories/99999")
        .add_header("X-API-Key", TEST_API_KEY)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<WebResponse<String>>();
    assert_eq!(body.code, 404);
    assert_eq!(body.status, "Not Found");
    assert_eq!(body.data.as_deref(), Some("category is not found"));
}

#[tokio::test]
async fn returns_not_found_for_id_outside_i32_range() {
    let (server, _db) = test_server().await;

    for id in ["3000000000", "-3000000000"] {
        let response = server
            .get(&format!("/api/categories/{id}"))
            .add_header("X-API-Key", TEST_API_KEY)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<WebResponse<String>>();
        assert_eq!(body.code, 404);
        assert_eq!(body.data.as_deref(), Some("category is not found"));
    }
}

#[tokio::test]
async fn returns_internal_error_for_non_numeric_id() {
    let (server, _db) = test_server().await;

    let response = server
        .get("/api/categories/abc")
        .add_header("X-API-Key", TEST_API_KEY)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<WebResponse<String>>();
    assert_eq!(body.status, "Internal Server Error");
    assert!(body.data.unwrap().contains("abc"));
}

#[tokio::test]
async fn returns_not_found_envelope_for_unknown_route() {
    let (server, _db) = test_server().await;

    let response = server
        .get("/api/unknown")
        .add_header("X-API-Key", TEST_API_KEY)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<WebResponse<String>>();
    assert_eq!(body.status, "Not Found");
    assert_eq!(body.data, None);
}
