use axum::{Json, response::IntoResponse};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::core::{errors::FlatgateError, models::user::Identity};

// Request structs for JSON payloads. Missing strings decode as empty so the
// handlers can answer with a 400 instead of a decoder rejection.
#[derive(Deserialize, ToSchema)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: Identity,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DatabasesResponse {
    pub databases: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DatabaseResponse {
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for FlatgateError to implement IntoResponse
pub struct ApiError(pub FlatgateError);

impl From<FlatgateError> for ApiError {
    fn from(err: FlatgateError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            FlatgateError::MissingFields => (StatusCode::BAD_REQUEST, "Email and password are required."),
            FlatgateError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body."),
            FlatgateError::InvalidDatabaseName(_) => (StatusCode::BAD_REQUEST, "Invalid database name."),
            FlatgateError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password."),
            FlatgateError::Forbidden => (StatusCode::FORBIDDEN, "Invalid admin word."),
            FlatgateError::DatabaseNotFound(_) => (StatusCode::NOT_FOUND, "Database not found."),
            FlatgateError::EmailAlreadyRegistered(_) => {
                (StatusCode::CONFLICT, "A user with that email already exists.")
            }
            err @ (FlatgateError::StoreRead(_)
            | FlatgateError::StoreWrite(_)
            | FlatgateError::DatabaseRead(_)
            | FlatgateError::InternalServerError(_)) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected server error.")
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: error_message.to_string(),
            }),
        )
            .into_response()
    }
}
