// ABOUTME: Todo storage layer using SQLite
// ABOUTME: Every read and write is scoped to the owning user

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::types::Todo;
use crate::error::StorageError;

pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All todos owned by `user_id`, newest first. The ordering is requested
    /// explicitly rather than relying on insertion order.
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<Todo>, StorageError> {
        debug!("Listing todos for user: {}", user_id);

        let rows = sqlx::query(
            "SELECT * FROM todos WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_todo).collect()
    }

    pub async fn create_todo(&self, user_id: &str, text: &str) -> Result<Todo, StorageError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!("Creating todo: {} for user: {}", id, user_id);

        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, text, completed, created_at)
            VALUES (?, ?, ?, 0, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(text)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Todo {
            id,
            text: text.to_string(),
            completed: false,
            created_at: now,
            user_id: user_id.to_string(),
        })
    }

    /// Flip the completion flag on a todo owned by `user_id`.
    pub async fn toggle_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo, StorageError> {
        let todo = self.get_owned(user_id, todo_id).await?;
        let completed = !todo.completed;

        sqlx::query("UPDATE todos SET completed = ? WHERE id = ? AND user_id = ?")
            .bind(completed)
            .bind(todo_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(Todo { completed, ..todo })
    }

    /// Delete a todo owned by `user_id`.
    pub async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<(), StorageError> {
        debug!("Deleting todo: {} for user: {}", todo_id, user_id);

        let result = sqlx::query("DELETE FROM todos WHERE id = ? AND user_id = ?")
            .bind(todo_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Joint `(id, user_id)` lookup. A lookup by id alone would let one user
    /// reach another's rows; a miss here never reveals whether the row exists
    /// under a different owner.
    async fn get_owned(&self, user_id: &str, todo_id: &str) -> Result<Todo, StorageError> {
        let row = sqlx::query("SELECT * FROM todos WHERE id = ? AND user_id = ?")
            .bind(todo_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_todo(&row),
            None => Err(StorageError::NotFound),
        }
    }
}

fn row_to_todo(row: &sqlx::sqlite::SqliteRow) -> Result<Todo, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(StorageError::from)?;
    Ok(Todo {
        id: row.try_get("id").map_err(StorageError::from)?,
        text: row.try_get("text").map_err(StorageError::from)?,
        completed: row.try_get("completed").map_err(StorageError::from)?,
        created_at,
        user_id: row.try_get("user_id").map_err(StorageError::from)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;
    use crate::users::UserStorage;

    async fn setup() -> (TodoStorage, String, String) {
        let pool = connect_in_memory().await.expect("in-memory database");
        let users = UserStorage::new(pool.clone());
        let alice = users
            .create_user("Alice", "alice@x.com", "hash-a")
            .await
            .unwrap();
        let bob = users
            .create_user("Bob", "bob@x.com", "hash-b")
            .await
            .unwrap();
        (TodoStorage::new(pool), alice.id, bob.id)
    }

    #[tokio::test]
    async fn created_todo_defaults_to_uncompleted() {
        let (todos, alice, _) = setup().await;
        let todo = todos.create_todo(&alice, "buy milk").await.unwrap();
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.user_id, alice);
    }

    #[tokio::test]
    async fn list_is_owner_scoped() {
        let (todos, alice, bob) = setup().await;
        let created = todos.create_todo(&alice, "buy milk").await.unwrap();

        let alices = todos.list_todos(&alice).await.unwrap();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].id, created.id);

        assert!(todos.list_todos(&bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (todos, alice, _) = setup().await;
        let first = todos.create_todo(&alice, "first").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = todos.create_todo(&alice, "second").await.unwrap();

        let listed = todos.list_todos(&alice).await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let (todos, alice, _) = setup().await;
        let todo = todos.create_todo(&alice, "buy milk").await.unwrap();

        let once = todos.toggle_todo(&alice, &todo.id).await.unwrap();
        assert!(once.completed);

        let twice = todos.toggle_todo(&alice, &todo.id).await.unwrap();
        assert!(!twice.completed);
    }

    #[tokio::test]
    async fn foreign_owned_todo_is_not_found() {
        let (todos, alice, bob) = setup().await;
        let todo = todos.create_todo(&alice, "buy milk").await.unwrap();

        assert!(matches!(
            todos.toggle_todo(&bob, &todo.id).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            todos.delete_todo(&bob, &todo.id).await,
            Err(StorageError::NotFound)
        ));

        // Alice's row survived Bob's attempts
        assert_eq!(todos.list_todos(&alice).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (todos, alice, _) = setup().await;
        let todo = todos.create_todo(&alice, "buy milk").await.unwrap();

        todos.delete_todo(&alice, &todo.id).await.unwrap();
        assert!(todos.list_todos(&alice).await.unwrap().is_empty());

        // Second delete of the same id is NotFound, not success
        assert!(matches!(
            todos.delete_todo(&alice, &todo.id).await,
            Err(StorageError::NotFound)
        ));
    }
}
