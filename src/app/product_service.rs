use crate::domain::error::{AppError, AppResult};
use crate::domain::model::{Product, ProductInput};
use crate::storage::repository::{CategoryRepository, ProductRepository};
use std::sync::Arc;

/// Product use cases.
///
/// Create and update first look up the referenced category so a dangling
/// `category_id` is reported as [`AppError::CategoryNotFound`] instead of a raw
/// constraint violation from the store.
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Product>> {
        self.products.get_all().await
    }

    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        input.validate()?;
        self.ensure_category_exists(input.category_id).await?;
        let mut product = input.into_product(0);
        self.products.create(&mut product).await?;
        Ok(product)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.products.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, input: ProductInput) -> AppResult<Product> {
        input.validate()?;
        self.ensure_category_exists(input.category_id).await?;
        let product = input.into_product(id);
        self.products.update(&product).await?;
        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.products.delete(id).await
    }

    async fn ensure_category_exists(&self, category_id: i32) -> AppResult<()> {
        match self.categories.get_by_id(category_id).await {
            Ok(_) => Ok(()),
            Err(AppError::NotFound) => Err(AppError::CategoryNotFound),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CategoryInput;
    use crate::app::CategoryService;
    use crate::storage::MemoryStore;

    struct Fixture {
        store: MemoryStore,
        categories: CategoryService,
        products: ProductService,
    }

    fn fixture() -> Fixture {
        let store = MemoryStore::new();
        let categories = Arc::new(store.categories());
        Fixture {
            categories: CategoryService::new(categories.clone()),
            products: ProductService::new(Arc::new(store.products()), categories),
            store,
        }
    }

    fn noodles(category_id: i32) -> ProductInput {
        ProductInput {
            name: "Noodles".to_string(),
            price: 3500,
            stock: 100,
            category_id,
        }
    }

    async fn seed_category(f: &Fixture) -> i32 {
        f.categories
            .create(CategoryInput {
                name: "Snacks".to_string(),
                description: Some("Light food".to_string()),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_with_unknown_category_persists_nothing() {
        let f = fixture();
        let err = f.products.create(noodles(999)).await.unwrap_err();
        assert!(matches!(err, AppError::CategoryNotFound));
        assert!(f.products.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_unknown_category_leaves_row_unchanged() {
        let f = fixture();
        let category_id = seed_category(&f).await;
        let created = f.products.create(noodles(category_id)).await.unwrap();

        let mut changed = noodles(999);
        changed.price = 1;
        let err = f.products.update(created.id, changed).await.unwrap_err();
        assert!(matches!(err, AppError::CategoryNotFound));

        let stored = f.products.get_by_id(created.id).await.unwrap();
        assert_eq!(stored.price, 3500);
        assert_eq!(stored.category_id, category_id);
    }

    #[tokio::test]
    async fn read_embeds_the_referenced_category() {
        let f = fixture();
        let category_id = seed_category(&f).await;
        let created = f.products.create(noodles(category_id)).await.unwrap();
        assert!(created.category.is_none());

        let fetched = f.products.get_by_id(created.id).await.unwrap();
        let expected = f.categories.get_by_id(category_id).await.unwrap();
        assert_eq!(fetched.category, Some(expected));

        let listed = f.products.get_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category.is_some());
    }

    #[tokio::test]
    async fn missing_product_is_not_found_not_category_not_found() {
        let f = fixture();
        let category_id = seed_category(&f).await;
        assert!(matches!(
            f.products.update(5, noodles(category_id)).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(f.products.delete(5).await, Err(AppError::NotFound)));
        assert!(matches!(f.products.get_by_id(5).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn store_failures_during_the_category_check_propagate() {
        let f = fixture();
        f.store.set_offline(true);
        let err = f.products.create(noodles(1)).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_the_category_check() {
        let f = fixture();
        let mut input = noodles(999);
        input.stock = -1;
        assert!(matches!(
            f.products.create(input).await,
            Err(AppError::InvalidInput(_))
        ));
    }
}
