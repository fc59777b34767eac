mod project;
mod shared;
mod task;
mod user;

use project::{InMemoryProjectRepo, PostgresProjectRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use task::{InMemoryTaskRepo, PostgresTaskRepo};
use tracing::info;
use user::{InMemoryUserRepo, PostgresUserRepo};

pub use project::IProjectRepo;
pub use shared::query_structs::*;
pub use task::ITaskRepo;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub tasks: Arc<dyn ITaskRepo>,
    pub projects: Arc<dyn IProjectRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            tasks: Arc::new(PostgresTaskRepo::new(pool.clone())),
            projects: Arc::new(PostgresProjectRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskRepo::new()),
            projects: Arc::new(InMemoryProjectRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
