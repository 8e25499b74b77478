use crate::domain::error::{AppError, AppResult};
use crate::domain::model::{Category, Product};
use crate::storage::repository::ProductRepository;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

// Inner join: the foreign key guarantees every product has its category.
const SELECT_WITH_CATEGORY: &str = "SELECT p.id, p.name, p.price, p.stock, p.category_id,
        c.name AS category_name, c.description AS category_description
    FROM products p
    JOIN categories c ON p.category_id = c.id";

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &PgRow) -> AppResult<Product> {
    let category_id: i32 = row.try_get("category_id")?;
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        category_id,
        category: Some(Category {
            id: category_id,
            name: row.try_get("category_name")?,
            description: row.try_get("category_description")?,
        }),
    })
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let sql = format!("{} ORDER BY p.id", SELECT_WITH_CATEGORY);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(product_from_row).collect()
    }

    async fn create(&self, product: &mut Product) -> AppResult<()> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price, stock, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;
        product.id = id;
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        let sql = format!("{} WHERE p.id = $1", SELECT_WITH_CATEGORY);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)?;
        product_from_row(&row)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE products SET name = $1, price = $2, stock = $3, category_id = $4 WHERE id = $5",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .bind(product.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
