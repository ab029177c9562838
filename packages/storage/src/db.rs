// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and storage layers

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::debug;

use crate::error::StorageResult;
use crate::todos::TodoStorage;
use crate::users::UserStorage;

/// Upper bound on waiting for a pool connection; a request must never block
/// indefinitely on storage.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default on-disk location when DATABASE_PATH is not configured.
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklight")
        .join("tasklight.db")
}

/// Open (creating if necessary) the database at `path` and run migrations.
pub async fn connect(path: &Path) -> StorageResult<SqlitePool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database_url = format!("sqlite:{}", path.display());

    if !sqlx::Sqlite::database_exists(&database_url).await? {
        debug!("Creating database at: {}", database_url);
        sqlx::Sqlite::create_database(&database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&database_url)
        .await?;

    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// In-memory database with the full schema applied. Test use only.
pub async fn connect_in_memory() -> StorageResult<SqlitePool> {
    // A single persistent connection: an in-memory database lives and dies
    // with its connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect("sqlite::memory:")
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub user_storage: Arc<UserStorage>,
    pub todo_storage: Arc<TodoStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let user_storage = Arc::new(UserStorage::new(pool.clone()));
        let todo_storage = Arc::new(TodoStorage::new(pool.clone()));

        Self {
            pool,
            user_storage,
            todo_storage,
        }
    }
}
