//! PostgreSQL-backed repositories and pool bootstrap.

pub mod category;
pub mod product;

pub use category::PostgresCategoryRepository;
pub use product::PostgresProductRepository;

use crate::domain::error::AppResult;
use crate::infra::config::AppConfig;
use crate::storage::repository::StoreHealth;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Tables owned by this service, in creation order.
pub const MANAGED_TABLES: &[&str] = &["categories", "products"];

const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price INTEGER NOT NULL,
        stock INTEGER NOT NULL DEFAULT 0,
        category_id INTEGER NOT NULL REFERENCES categories(id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products (category_id)",
];

/// Connects a bounded pool using the limits from `config.pool`.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .idle_timeout(config.pool.idle_timeout)
        .max_lifetime(config.pool.max_lifetime)
        .acquire_timeout(config.pool.acquire_timeout)
        .connect(&config.database_url)
        .await?;
    tracing::info!(
        max_connections = config.pool.max_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Creates the catalog tables and index when they are missing.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Returns the managed tables that do not exist yet in the `public` schema.
pub async fn missing_tables(pool: &PgPool) -> anyhow::Result<Vec<String>> {
    let present: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables
         WHERE table_schema = 'public' AND table_name::text = ANY($1)",
    )
    .bind(MANAGED_TABLES.to_vec())
    .fetch_all(pool)
    .await?;

    Ok(MANAGED_TABLES
        .iter()
        .filter(|t| !present.iter().any(|p| p.as_str() == **t))
        .map(|t| t.to_string())
        .collect())
}

#[derive(Clone)]
pub struct PostgresStoreHealth {
    pool: PgPool,
}

impl PostgresStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PostgresStoreHealth {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
