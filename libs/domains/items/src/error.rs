use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Item not found";
pub const MISSING_FIELD_MESSAGE: &str = "Name and date are required";
pub const INVALID_DATE_MESSAGE: &str = "Date must be in dd-mm-yyyy format";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item {0} not found")]
    NotFound(u64),

    /// Path segment that cannot be an item id.
    #[error("Item '{0}' not found")]
    InvalidId(String),

    #[error("{}", MISSING_FIELD_MESSAGE)]
    MissingField,

    #[error("{}", INVALID_DATE_MESSAGE)]
    InvalidDate,

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) | ItemError::InvalidId(_) => {
                AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            ItemError::MissingField | ItemError::InvalidDate => {
                AppError::BadRequest(err.to_string())
            }
            ItemError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<std::io::Error> for ItemError {
    fn from(err: std::io::Error) -> Self {
        ItemError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ItemError {
    fn from(err: serde_json::Error) -> Self {
        ItemError::Storage(err.to_string())
    }
}
