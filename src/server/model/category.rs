use validator::Validate;

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

/// A persisted category.
///
/// `Default` yields the empty category (`id: 0`, empty name) returned when a
/// create request fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the category to its response projection.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateCategoryParams {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UpdateCategoryParams {
    pub id: i32,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl UpdateCategoryParams {
    /// Combines the path id with the request body.
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self { id, name: dto.name }
    }
}
