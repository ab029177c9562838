// ABOUTME: API error type that all handlers return
// ABOUTME: Renders every failure as a JSON body with an `error` field

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use tasklight_storage::StorageError;

/// Main application error type that all handlers return
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    Conflict,

    #[error("User not found")]
    UnknownUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No token, authorization denied")]
    MissingToken,

    #[error("Token is not valid")]
    InvalidToken,

    #[error("Task not found")]
    NotFound,

    #[error("Service temporarily unavailable")]
    Unavailable,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            // The client contract fixes duplicate registration and failed
            // login at 400 rather than 409/404.
            ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::UnknownUser => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ResponseJson(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ApiError::NotFound,
            StorageError::DuplicateEmail(_) => ApiError::Conflict,
            StorageError::Unavailable => ApiError::Unavailable,
            e => {
                // Internal causes are logged, never sent to the client
                error!(error = %e, "Storage operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<tasklight_auth::AuthError> for ApiError {
    fn from(err: tasklight_auth::AuthError) -> Self {
        match err {
            tasklight_auth::AuthError::InvalidToken => ApiError::InvalidToken,
            tasklight_auth::AuthError::Hash(e) => {
                error!(error = %e, "Password hashing failed");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_contract() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Conflict.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn ownership_miss_maps_to_not_found() {
        let err: ApiError = StorageError::NotFound.into();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let err: ApiError = StorageError::DuplicateEmail("a@x.com".into()).into();
        assert!(matches!(err, ApiError::Conflict));
    }
}
