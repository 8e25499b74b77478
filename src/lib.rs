pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CategoryService, ProductService};
pub use domain::error::{AppError, AppResult};
pub use domain::model::{Category, CategoryInput, Product, ProductInput};
pub use infra::config::AppConfig;
pub use storage::MemoryStore;
