pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod common;
    pub mod health;
    pub mod products;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
