use thiserror::Error;

/// Error taxonomy shared by the persistence and business layers.
///
/// Only the request layer turns these into HTTP statuses.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested identifier matches no stored row.
    #[error("resource not found")]
    NotFound,

    /// A product references a category identifier that does not exist.
    #[error("category not found")]
    CategoryNotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The store refused the operation because other rows still depend on it.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;
