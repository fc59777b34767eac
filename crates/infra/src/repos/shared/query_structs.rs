use taskdeck_domain::{TaskStatus, ID};

/// Filters for listing `Task`s. `None` means no filtering on that field.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub project_id: Option<ID>,
    pub status: Option<TaskStatus>,
}

impl TaskQuery {
    pub fn matches(&self, task: &taskdeck_domain::Task) -> bool {
        let project_matches = match &self.project_id {
            Some(project_id) => task.project_id.as_ref() == Some(project_id),
            None => true,
        };
        let status_matches = match &self.status {
            Some(status) => task.status == *status,
            None => true,
        };
        project_matches && status_matches
    }
}
