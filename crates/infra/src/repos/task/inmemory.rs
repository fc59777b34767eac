use super::ITaskRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::TaskQuery};
use taskdeck_domain::{Task, ID};

pub struct InMemoryTaskRepo {
    tasks: std::sync::Mutex<Vec<Task>>,
}

impl InMemoryTaskRepo {
    pub fn new() -> Self {
        Self {
            tasks: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITaskRepo for InMemoryTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        insert(task, &self.tasks);
        Ok(())
    }

    async fn find(&self, task_id: &ID) -> Option<Task> {
        find(task_id, &self.tasks)
    }

    async fn find_by(&self, query: &TaskQuery) -> anyhow::Result<Vec<Task>> {
        let mut tasks = find_by(&self.tasks, |t| query.matches(t));
        tasks.sort_by(|t1, t2| t2.created_at.cmp(&t1.created_at));
        Ok(tasks)
    }

    async fn find_reminder_candidates(&self) -> anyhow::Result<Vec<Task>> {
        Ok(find_by(&self.tasks, |t| t.is_reminder_eligible()))
    }

    async fn set_last_reminded_at(&self, task_id: &ID, reminded_at: i64) -> anyhow::Result<()> {
        update_many(
            &self.tasks,
            |t| t.id == *task_id && t.last_reminded_at.map_or(true, |ts| ts < reminded_at),
            |t| t.last_reminded_at = Some(reminded_at),
        );
        Ok(())
    }
}
