// ABOUTME: Todo module exports
// ABOUTME: Task store types and owner-scoped storage operations

mod storage;
mod types;

pub use storage::TodoStorage;
pub use types::Todo;
