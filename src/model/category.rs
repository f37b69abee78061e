use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

/// Request body for `POST /api/categories`.
///
/// A missing `name` decodes as an empty string so it reaches validation
/// instead of failing JSON decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    #[serde(default)]
    pub name: String,
}

/// Request body for `PUT /api/categories/{category_id}`.
///
/// The id always comes from the path, never from the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryDto {
    #[serde(default)]
    pub name: String,
}
