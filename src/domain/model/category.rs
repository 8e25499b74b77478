use crate::domain::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Snacks")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Light food")]
    pub description: Option<String>,
}

/// Payload accepted on create and update (no identifier).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CategoryInput {
    #[schema(example = "Snacks")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Light food")]
    pub description: Option<String>,
}

impl CategoryInput {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Category name is required".to_string()));
        }
        Ok(())
    }

    /// Builds the entity for `id`. Creates pass `0` and let the store assign one.
    pub fn into_category(self, id: i32) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
