// ABOUTME: Authentication primitives for Tasklight
// ABOUTME: Password hashing and stateless bearer-token mint/verify

pub mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenSigner};
