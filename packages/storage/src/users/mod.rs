// ABOUTME: User module exports
// ABOUTME: Credential store types and storage operations

mod storage;
mod types;

pub use storage::UserStorage;
pub use types::{PublicUser, User};
