use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Path segment that is neither an integer nor a UUID.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected an integer or a UUID, got '{0}'")]
pub struct InvalidItemId(pub String);

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound("Item not found".to_string()),
            ItemError::Validation(msg) => AppError::UnprocessableEntity(msg),
            ItemError::Storage(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
