// ABOUTME: HTTP request handlers for registration and login
// ABOUTME: Turns credentials into a token plus a redacted user view

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use tasklight_auth::{hash_password, verify_password};
use tasklight_storage::PublicUser;

use crate::error::ApiError;
use crate::AppState;

/// Request body for registration
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Token plus redacted user, returned by both register and login
#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(format!("Missing field: {name}"))),
    }
}

/// Register a new user and issue their first token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = require(request.name, "name")?;
    let email = require(request.email, "email")?;
    let password = require(request.password, "password")?;

    let password_hash = hash_password(&password)?;

    let user = state
        .db
        .user_storage
        .create_user(&name, &email, &password_hash)
        .await?;

    info!("Registered user: {}", user.id);

    let token = state.signer.mint(&user.id)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Exchange email and password for a token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = require(request.email, "email")?;
    let password = require(request.password, "password")?;

    let user = state
        .db
        .user_storage
        .get_user_by_email(&email)
        .await?
        .ok_or(ApiError::UnknownUser)?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    info!("User logged in: {}", user.id);

    let token = state.signer.mint(&user.id)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
