use thiserror::Error;
use waitlist_types::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Email already registered in waitlist")]
    DuplicateEntry,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("{0}")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
