use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::repositories::registration_repository::RepositoryError;
use crate::services::registration_service::RegistrationServiceError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<RegistrationServiceError> for AppError {
    fn from(err: RegistrationServiceError) -> Self {
        match err {
            RegistrationServiceError::Repository(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
            .into_response()
    }
}
