// ABOUTME: Data layer and persistence for Tasklight
// ABOUTME: SQLite pool construction, migrations, and per-concern storage structs

pub mod db;
pub mod error;
pub mod todos;
pub mod users;

pub use db::{connect, connect_in_memory, default_database_path, DbState};
pub use error::{StorageError, StorageResult};
pub use todos::{Todo, TodoStorage};
pub use users::{PublicUser, User, UserStorage};
