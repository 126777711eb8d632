use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PetNotFound(ObjectId),
    UnexpectedError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(e) => (StatusCode::BAD_REQUEST, format!("Bad request: {}", e)),
            Self::PetNotFound(pet_id) => (
                StatusCode::NOT_FOUND,
                format!("Pet {} could not be found", pet_id),
            ),
            Self::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error has occured".to_string(),
            ),
        }
        .into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(?e, "store error");
        Self::UnexpectedError
    }
}
