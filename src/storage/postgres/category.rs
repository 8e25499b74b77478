use crate::domain::error::{AppError, AppResult};
use crate::domain::model::Category;
use crate::storage::repository::CategoryRepository;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn category_from_row(row: &PgRow) -> AppResult<Category> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(category_from_row).collect()
    }

    async fn create(&self, category: &mut Category) -> AppResult<()> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await?;
        category.id = id;
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        let row = sqlx::query("SELECT id, name, description FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)?;
        category_from_row(&row)
    }

    async fn update(&self, category: &Category) -> AppResult<()> {
        let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    AppError::Conflict(format!("category {} is still referenced by products", id))
                }
                other => AppError::Database(other),
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
