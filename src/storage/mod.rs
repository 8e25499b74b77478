pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryStore;
pub use postgres::{PostgresCategoryRepository, PostgresProductRepository, PostgresStoreHealth};
pub use repository::{CategoryRepository, ProductRepository, StoreHealth};
