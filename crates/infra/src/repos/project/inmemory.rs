use super::IProjectRepo;
use crate::repos::shared::inmemory_repo::*;
use taskdeck_domain::{Project, ID};

pub struct InMemoryProjectRepo {
    projects: std::sync::Mutex<Vec<Project>>,
}

impl InMemoryProjectRepo {
    pub fn new() -> Self {
        Self {
            projects: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IProjectRepo for InMemoryProjectRepo {
    async fn insert(&self, project: &Project) -> anyhow::Result<()> {
        insert(project, &self.projects);
        Ok(())
    }

    async fn find(&self, project_id: &ID) -> Option<Project> {
        find(project_id, &self.projects)
    }

    async fn find_many(&self, project_ids: &[ID]) -> anyhow::Result<Vec<Project>> {
        Ok(find_by(&self.projects, |p| project_ids.contains(&p.id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Project>> {
        let mut projects = find_by(&self.projects, |_| true);
        projects.sort_by(|p1, p2| p2.created_at.cmp(&p1.created_at));
        Ok(projects)
    }
}
