use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum BeerError {
    #[error("Beer already registered in the system with name: {0}")]
    DuplicateName(String),

    #[error("Beer not found with ID {0}")]
    NotFound(Uuid),

    #[error("Beer not found with name {0}")]
    NotFoundByName(String),

    #[error("Beer {id}: increment of {amount} exceeds the max stock capacity: {max}")]
    StockExceeded { id: Uuid, amount: i32, max: i32 },

    #[error("Beer {id}: decrement of {amount} exceeds the quantity in stock: {quantity}")]
    NegativeStock { id: Uuid, amount: i32, quantity: i32 },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BeerResult<T> = Result<T, BeerError>;

impl From<BeerError> for AppError {
    fn from(err: BeerError) -> Self {
        match err {
            BeerError::NotFound(_) | BeerError::NotFoundByName(_) => {
                AppError::NotFound(err.to_string())
            }
            BeerError::DuplicateName(_)
            | BeerError::StockExceeded { .. }
            | BeerError::NegativeStock { .. } => AppError::BadRequest(err.to_string()),
            BeerError::Validation(errors) => AppError::ValidationError(errors),
            BeerError::Database(e) => AppError::InternalServerError(e.to_string()),
            BeerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
