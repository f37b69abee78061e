use axum::{http::StatusCode, middleware, response::IntoResponse, Router};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::WebResponse,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        controller::category,
        middleware::auth::{require_api_key, API_KEY_HEADER},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    components(schemas(CategoryDto, CreateCategoryDto, UpdateCategoryDto)),
    modifiers(&ApiKeyAddon)
)]
pub struct ApiDoc;

/// Registers the `X-API-Key` header scheme referenced by every endpoint.
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

/// Builds the full application router.
///
/// The API key middleware wraps every route, the OpenAPI document, and the
/// fallback, so nothing is reachable without a valid key.
pub fn router(state: AppState) -> Router {
    let (api_router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}

async fn fallback() -> impl IntoResponse {
    WebResponse::<()>::empty(StatusCode::NOT_FOUND)
}
