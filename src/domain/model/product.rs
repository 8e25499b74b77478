use super::Category;
use crate::domain::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Noodles")]
    pub name: String,
    /// Price in the currency's smallest unit.
    #[schema(example = 3500)]
    pub price: i32,
    #[schema(example = 100)]
    pub stock: i32,
    #[schema(example = 1)]
    pub category_id: i32,
    /// Snapshot of the referenced category. Populated on reads only, never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Payload accepted on create and update (no identifier).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Noodles")]
    pub name: String,
    #[schema(example = 3500)]
    pub price: i32,
    #[serde(default)]
    #[schema(example = 100)]
    pub stock: i32,
    #[schema(example = 1)]
    pub category_id: i32,
}

impl ProductInput {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Product name is required".to_string()));
        }
        if self.price < 0 {
            return Err(AppError::InvalidInput("Price cannot be negative".to_string()));
        }
        if self.stock < 0 {
            return Err(AppError::InvalidInput("Stock cannot be negative".to_string()));
        }
        Ok(())
    }

    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            category: None,
        }
    }
}
