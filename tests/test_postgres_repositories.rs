//! Repository and service tests against a live Postgres.
//!
//! Skipped unless `DATABASE_URL` is set. The catalog tables are truncated first, so point it
//! at a disposable database.

use catalog_api::storage::postgres::{self, PostgresCategoryRepository, PostgresProductRepository};
use catalog_api::storage::{CategoryRepository, ProductRepository, StoreHealth};
use catalog_api::{AppConfig, AppError, CategoryInput, CategoryService, ProductInput, ProductService};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_repositories() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping Postgres repository test");
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let pool = postgres::connect(&config).await?;
    postgres::ensure_schema(&pool).await?;
    assert!(postgres::missing_tables(&pool).await?.is_empty());
    sqlx::query("TRUNCATE TABLE products, categories RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    postgres::PostgresStoreHealth::new(pool.clone()).ping().await?;

    let category_repo = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let product_repo = Arc::new(PostgresProductRepository::new(pool.clone()));
    let categories = CategoryService::new(category_repo.clone());
    let products = ProductService::new(product_repo.clone(), category_repo.clone());

    // Empty store lists nothing.
    assert!(categories.get_all().await?.is_empty());
    assert!(products.get_all().await?.is_empty());

    // Create then read back.
    let snacks = categories
        .create(CategoryInput {
            name: "Snacks".to_string(),
            description: Some("Light food".to_string()),
        })
        .await?;
    assert_eq!(snacks.id, 1);
    assert_eq!(categories.get_by_id(snacks.id).await?, snacks);

    // Unknown category: rejected before touching the products table.
    let noodles = ProductInput {
        name: "Noodles".to_string(),
        price: 3500,
        stock: 100,
        category_id: 999,
    };
    assert!(matches!(
        products.create(noodles.clone()).await,
        Err(AppError::CategoryNotFound)
    ));
    assert!(products.get_all().await?.is_empty());

    // Round trip with the joined category.
    let created = products
        .create(ProductInput {
            category_id: snacks.id,
            ..noodles.clone()
        })
        .await?;
    let fetched = products.get_by_id(created.id).await?;
    assert_eq!(fetched.category.as_ref(), Some(&snacks));
    assert_eq!(products.get_all().await?.len(), 1);

    // The repository surfaces a dangling reference as a plain database error.
    let mut orphan = created.clone();
    orphan.id = 0;
    orphan.category_id = 999;
    orphan.category = None;
    assert!(matches!(
        product_repo.create(&mut orphan).await,
        Err(AppError::Database(_))
    ));

    // Referenced categories are protected by the foreign key.
    assert!(matches!(
        category_repo.delete(snacks.id).await,
        Err(AppError::Conflict(_))
    ));

    // Missing ids.
    assert!(matches!(products.get_by_id(4242).await, Err(AppError::NotFound)));
    assert!(matches!(products.delete(4242).await, Err(AppError::NotFound)));
    assert!(matches!(
        categories
            .update(
                4242,
                CategoryInput {
                    name: "Ghost".to_string(),
                    description: None
                }
            )
            .await,
        Err(AppError::NotFound)
    ));

    products.delete(created.id).await?;
    categories.delete(snacks.id).await?;
    assert!(matches!(categories.get_by_id(snacks.id).await, Err(AppError::NotFound)));

    pool.close().await;
    Ok(())
}
