//! Persistence contracts.
//!
//! Every entity exposes the same five operations. "No matching row" on
//! `get_by_id`, `update` and `delete` is always reported as [`AppError::NotFound`],
//! whether the row never existed or the statement simply touched nothing.
//!
//! [`AppError::NotFound`]: crate::domain::error::AppError::NotFound

use crate::domain::error::AppResult;
use crate::domain::model::{Category, Product};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns every category; an empty `Vec` when there are none.
    async fn get_all(&self) -> AppResult<Vec<Category>>;

    /// Inserts the category and writes the store-assigned id back onto it.
    async fn create(&self, category: &mut Category) -> AppResult<()>;

    async fn get_by_id(&self, id: i32) -> AppResult<Category>;

    /// Replaces name and description of the row identified by `category.id`.
    async fn update(&self, category: &Category) -> AppResult<()>;

    /// Fails with `Conflict` while products still reference the category.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product with its category snapshot populated.
    async fn get_all(&self) -> AppResult<Vec<Product>>;

    /// Inserts the product and writes the store-assigned id back onto it.
    ///
    /// A dangling `category_id` is rejected by the store as a plain database error.
    async fn create(&self, product: &mut Product) -> AppResult<()>;

    /// Returns the product with its category snapshot populated.
    async fn get_by_id(&self, id: i32) -> AppResult<Product>;

    /// Replaces all four scalar fields of the row identified by `product.id`.
    async fn update(&self, product: &Product) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Reachability probe for the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}
