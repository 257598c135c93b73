use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid profile record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;
