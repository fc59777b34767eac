mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, Environment};
pub use repos::{IProjectRepo, ITaskRepo, IUserRepo, Repos, TaskQuery};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, StaticTimeSys};
use system::RealSys;
use tracing::info;

/// Handles to everything a use case needs. Cloned into every request and job.
#[derive(Clone)]
pub struct TaskdeckContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl TaskdeckContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<TaskdeckContext> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => {
            info!(
                "{} env var was provided. Going to use postgres.",
                PSQL_CONNECTION_STRING
            );
            TaskdeckContext::create_postgres(&connection_string).await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                PSQL_CONNECTION_STRING
            );
            Ok(TaskdeckContext::create_inmemory())
        }
    }
}
