mod inmemory;
mod postgres;

pub use inmemory::InMemoryTaskRepo;
pub use postgres::PostgresTaskRepo;

use crate::repos::shared::query_structs::TaskQuery;
use taskdeck_domain::{Task, ID};

#[async_trait::async_trait]
pub trait ITaskRepo: Send + Sync {
    async fn insert(&self, task: &Task) -> anyhow::Result<()>;
    async fn find(&self, task_id: &ID) -> Option<Task>;
    /// Newest `Task`s first
    async fn find_by(&self, query: &TaskQuery) -> anyhow::Result<Vec<Task>>;
    /// All `Task`s that are not done and have a reminder set
    async fn find_reminder_candidates(&self) -> anyhow::Result<Vec<Task>>;
    /// Sets `last_reminded_at` unless the stored value is already at or after `reminded_at`
    async fn set_last_reminded_at(&self, task_id: &ID, reminded_at: i64) -> anyhow::Result<()>;
}
