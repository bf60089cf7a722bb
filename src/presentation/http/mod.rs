pub mod accounts;
pub mod auth;
pub mod health;
pub mod items;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Wire shape for every non-2xx body: `{"message": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

/// Boundary error: a status code plus a human-readable message.
/// Application-layer error kinds are converted into this at the handlers.
#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub String);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found() -> Self {
        Self(StatusCode::NOT_FOUND, "Not found.".into())
    }

    pub fn unauthorized() -> Self {
        Self(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided or are invalid.".into(),
        )
    }

    pub fn internal() -> Self {
        Self(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.".into(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(Message { message: self.1 })).into_response()
    }
}
