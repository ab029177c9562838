// ABOUTME: HTTP API layer for Tasklight providing REST endpoints and routing
// ABOUTME: Routers, handlers, and the authenticated-request extractor

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use tasklight_auth::TokenSigner;
use tasklight_storage::DbState;

pub mod auth;
pub mod auth_handlers;
pub mod error;
pub mod health;
pub mod todos_handlers;

pub use auth::CurrentUser;
pub use error::ApiError;

/// Shared application state: database handles plus the token signer.
/// The signer is constructed once at startup and never replaced.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub signer: TokenSigner,
}

impl AppState {
    pub fn new(db: DbState, signer: TokenSigner) -> Self {
        Self { db, signer }
    }
}

/// Creates the unauthenticated auth router (register/login plus health)
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login))
        .route("/health", get(health::health_check))
}

/// Creates the todos API router (nested under /todos, token required)
pub fn create_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos_handlers::list_todos))
        .route("/", post(todos_handlers::create_todo))
        .route("/{id}", put(todos_handlers::toggle_todo))
        .route("/{id}", delete(todos_handlers::delete_todo))
}

/// Assemble the full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_auth_router())
        .nest("/todos", create_todos_router())
        .with_state(state)
}
