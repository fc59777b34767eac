mod inmemory;
mod postgres;

pub use inmemory::InMemoryProjectRepo;
pub use postgres::PostgresProjectRepo;

use taskdeck_domain::{Project, ID};

#[async_trait::async_trait]
pub trait IProjectRepo: Send + Sync {
    async fn insert(&self, project: &Project) -> anyhow::Result<()>;
    async fn find(&self, project_id: &ID) -> Option<Project>;
    async fn find_many(&self, project_ids: &[ID]) -> anyhow::Result<Vec<Project>>;
    /// Newest `Project`s first
    async fn find_all(&self) -> anyhow::Result<Vec<Project>>;
}
