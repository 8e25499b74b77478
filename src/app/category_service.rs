use crate::domain::error::AppResult;
use crate::domain::model::{Category, CategoryInput};
use crate::storage::repository::CategoryRepository;
use std::sync::Arc;

/// Category use cases. Apart from input validation this is a passthrough to the repository.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Category>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        input.validate()?;
        let mut category = input.into_category(0);
        self.repo.create(&mut category).await?;
        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        self.repo.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, input: CategoryInput) -> AppResult<Category> {
        input.validate()?;
        let category = input.into_category(id);
        self.repo.update(&category).await?;
        Ok(category)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::storage::MemoryStore;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(MemoryStore::new().categories()))
    }

    fn snacks() -> CategoryInput {
        CategoryInput {
            name: "Snacks".to_string(),
            description: Some("Light food".to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_input_with_new_id() {
        let service = service();
        let created = service.create(snacks()).await.unwrap();
        assert!(created.id > 0);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, snacks().into_category(created.id));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        assert!(service().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let service = service();
        assert!(matches!(service.get_by_id(42).await, Err(AppError::NotFound)));
        assert!(matches!(service.delete(42).await, Err(AppError::NotFound)));
        assert!(matches!(
            service.update(42, snacks()).await,
            Err(AppError::NotFound)
        ));
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_name_and_description() {
        let service = service();
        let created = service.create(snacks()).await.unwrap();
        let updated = service
            .update(
                created.id,
                CategoryInput {
                    name: "Beverages".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(service.get_by_id(created.id).await.unwrap(), updated);
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn blank_name_never_reaches_the_store() {
        let service = service();
        let err = service
            .create(CategoryInput {
                name: String::new(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(service.get_all().await.unwrap().is_empty());
    }
}
