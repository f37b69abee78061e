use std::num::IntErrorKind;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::WebResponse,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        data::category::CATEGORY_NOT_FOUND,
        error::{internal::InternalError, AppError},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::parse::parse_i32_from_string,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Data returned by a successful delete.
pub const CATEGORY_DELETED: &str = "Category deleted";

/// Parses the `category_id` path segment.
///
/// An integer outside the `i32` range cannot name a stored category and is
/// reported as not found; anything that is not an integer stays a parse error.
fn parse_category_id(category_id: String) -> Result<i32, AppError> {
    match parse_i32_from_string(category_id) {
        Err(AppError::InternalErr(InternalError::ParseStringId { source, .. }))
            if matches!(
                source.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            Err(AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))
        }
        result => result,
    }
}

/// Create a new category.
///
/// An empty name is not rejected: the response is `200 OK` with an empty
/// category (`id` 0) and nothing is stored.
///
/// # Returns
/// - `200 OK` - Created category, or the empty category for an invalid name
/// - `400 Bad Request` - Body is not valid JSON for `CreateCategoryDto`
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Successfully created category", body = WebResponse<CategoryDto>),
        (status = 400, description = "Malformed request body", body = WebResponse<String>),
        (status = 401, description = "Missing or invalid API key", body = WebResponse<String>),
        (status = 500, description = "Internal server error", body = WebResponse<String>)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = CategoryService::new(&state.db);

    let category = service
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok(WebResponse::ok(category.into_dto()))
}

/// Get all categories.
///
/// # Returns
/// - `200 OK` - Every category in id order
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Successfully retrieved categories", body = WebResponse<Vec<CategoryDto>>),
        (status = 401, description = "Missing or invalid API key", body = WebResponse<String>),
        (status = 500, description = "Internal server error", body = WebResponse<String>)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.find_all().await?;

    Ok(WebResponse::ok(
        categories
            .into_iter()
            .map(|category| category.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a specific category by ID.
///
/// # Returns
/// - `200 OK` - Category details
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Non-numeric ID or database error
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Successfully retrieved category", body = WebResponse<CategoryDto>),
        (status = 401, description = "Missing or invalid API key", body = WebResponse<String>),
        (status = 404, description = "Category not found", body = WebResponse<String>),
        (status = 500, description = "Internal server error", body = WebResponse<String>)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_category_id(category_id)?;

    let service = CategoryService::new(&state.db);

    let category = service.find_by_id(id).await?;

    Ok(WebResponse::ok(category.into_dto()))
}

/// Rename a category.
///
/// The ID is taken from the path; any `id` in the body is ignored.
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Empty name or malformed body
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Non-numeric ID or database error
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Successfully updated category", body = WebResponse<CategoryDto>),
        (status = 400, description = "Invalid category data", body = WebResponse<String>),
        (status = 401, description = "Missing or invalid API key", body = WebResponse<String>),
        (status = 404, description = "Category not found", body = WebResponse<String>),
        (status = 500, description = "Internal server error", body = WebResponse<String>)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    payload: Result<Json<UpdateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let id = parse_category_id(category_id)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .update(UpdateCategoryParams::from_dto(id, payload))
        .await?;

    Ok(WebResponse::ok(category.into_dto()))
}

/// Delete a category.
///
/// # Returns
/// - `200 OK` - Category deleted
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Non-numeric ID or database error
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Successfully deleted category", body = WebResponse<String>),
        (status = 401, description = "Missing or invalid API key", body = WebResponse<String>),
        (status = 404, description = "Category not found", body = WebResponse<String>),
        (status = 500, description = "Internal server error", body = WebResponse<String>)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_category_id(category_id)?;

    let service = CategoryService::new(&state.db);

    service.delete(id).await?;

    Ok(WebResponse::ok(CATEGORY_DELETED.to_string()))
}
