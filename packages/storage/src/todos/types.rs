// ABOUTME: Todo type for the task store
// ABOUTME: Serializes to the fixed client wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task. Wire shape is fixed by the client contract:
/// `{_id, text, completed, createdAt, user}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "user")]
    pub user_id: String,
}
