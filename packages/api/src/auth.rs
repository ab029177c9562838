// ABOUTME: Authentication context for API requests
// ABOUTME: Extracts and verifies the bearer token before any handler runs

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::AppState;

/// Header carrying the bearer token on every protected request.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Current authenticated user, resolved from the presented token.
///
/// Extraction is fail-closed: a handler taking `CurrentUser` never runs, and
/// never touches storage, unless verification succeeded. Verification itself
/// is stateless - the id comes from the signed token, not a lookup.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let id = state.signer.verify(token)?;

        Ok(Self { id })
    }
}
