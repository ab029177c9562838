// ABOUTME: Error types for the auth package
// ABOUTME: Covers token verification and password hashing failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Token failed signature or structure verification. Tampered, malformed,
    /// empty, and wrong-key tokens all land here indistinguishably.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Password hashing error: {0}")]
    Hash(String),
}
