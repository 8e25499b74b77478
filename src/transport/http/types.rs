use crate::app::{CategoryService, ProductService};
use crate::storage::postgres::{
    PostgresCategoryRepository, PostgresProductRepository, PostgresStoreHealth,
};
use crate::storage::{CategoryRepository, MemoryStore, ProductRepository, StoreHealth};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            product_service: Arc::new(ProductService::new(products, categories)),
            store_health,
        }
    }

    /// Wires every layer against the shared Postgres pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresProductRepository::new(pool.clone())),
            Arc::new(PostgresStoreHealth::new(pool)),
        )
    }

    pub fn in_memory(store: MemoryStore) -> Self {
        Self::new(
            Arc::new(store.categories()),
            Arc::new(store.products()),
            Arc::new(store),
        )
    }
}

/// Uniform response envelope: `data` on success, `error` on failure.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "connected")]
    pub database: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Category deleted successfully")]
    pub message: String,
}
