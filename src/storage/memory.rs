//! In-memory store implementing the same repository contracts as Postgres.
//!
//! Categories and products share one table set behind a `tokio::sync::Mutex`, so the
//! store can enforce the product → category reference the way the foreign key does.
//! Identifiers start at 1 and are never reused.

use crate::domain::error::{AppError, AppResult};
use crate::domain::model::{Category, Product};
use crate::storage::repository::{CategoryRepository, ProductRepository, StoreHealth};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    last_category_id: i32,
    last_product_id: i32,
}

#[derive(Default)]
struct Shared {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    shared: Arc<Shared>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> MemoryCategoryRepository {
        MemoryCategoryRepository {
            shared: self.shared.clone(),
        }
    }

    pub fn products(&self) -> MemoryProductRepository {
        MemoryProductRepository {
            shared: self.shared.clone(),
        }
    }

    /// Simulates losing the connection: every operation fails until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.shared.offline.store(offline, Ordering::SeqCst);
    }
}

impl Shared {
    async fn tables(&self) -> AppResult<tokio::sync::MutexGuard<'_, Tables>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Internal("store unavailable".to_string()));
        }
        Ok(self.tables.lock().await)
    }
}

fn dangling_reference(category_id: i32) -> AppError {
    AppError::Internal(format!(
        "foreign key violation: category {} does not exist",
        category_id
    ))
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        self.shared.tables().await.map(|_| ())
    }
}

#[derive(Clone)]
pub struct MemoryCategoryRepository {
    shared: Arc<Shared>,
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let tables = self.shared.tables().await?;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn create(&self, category: &mut Category) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        tables.last_category_id += 1;
        category.id = tables.last_category_id;
        tables.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        let tables = self.shared.tables().await?;
        tables.categories.get(&id).cloned().ok_or(AppError::NotFound)
    }

    async fn update(&self, category: &Category) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        match tables.categories.get_mut(&category.id) {
            Some(slot) => {
                *slot = category.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        if !tables.categories.contains_key(&id) {
            return Err(AppError::NotFound);
        }
        if tables.products.values().any(|p| p.category_id == id) {
            return Err(AppError::Conflict(format!(
                "category {} is still referenced by products",
                id
            )));
        }
        tables.categories.remove(&id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct MemoryProductRepository {
    shared: Arc<Shared>,
}

fn with_category(tables: &Tables, product: &Product) -> Product {
    let mut joined = product.clone();
    joined.category = tables.categories.get(&product.category_id).cloned();
    joined
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let tables = self.shared.tables().await?;
        Ok(tables
            .products
            .values()
            .map(|p| with_category(&tables, p))
            .collect())
    }

    async fn create(&self, product: &mut Product) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        if !tables.categories.contains_key(&product.category_id) {
            return Err(dangling_reference(product.category_id));
        }
        tables.last_product_id += 1;
        product.id = tables.last_product_id;
        let mut stored = product.clone();
        stored.category = None;
        tables.products.insert(stored.id, stored);
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        let tables = self.shared.tables().await?;
        let product = tables.products.get(&id).ok_or(AppError::NotFound)?;
        Ok(with_category(&tables, product))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        if !tables.products.contains_key(&product.id) {
            return Err(AppError::NotFound);
        }
        if !tables.categories.contains_key(&product.category_id) {
            return Err(dangling_reference(product.category_id));
        }
        let mut stored = product.clone();
        stored.category = None;
        tables.products.insert(stored.id, stored);
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.shared.tables().await?;
        tables
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
