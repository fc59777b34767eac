use crate::project::dtos::ProjectSummaryDTO;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskdeck_domain::{Project, Task, TaskAssignee, TaskPriority, TaskStatus, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskDTO {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: Option<ID>,
    pub project: Option<ProjectSummaryDTO>,
    pub assigned_to: Option<ID>,
    pub assignee: Option<TaskAssignee>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    pub reminder_hours_before: Option<u32>,
    pub last_reminded_at: Option<i64>,
    pub webhook_url: Option<String>,
    pub created_by: Option<ID>,
    pub created_at: i64,
}

impl TaskDTO {
    pub fn new(task: Task, project: Option<&Project>) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            project_id: task.project_id,
            project: project.map(ProjectSummaryDTO::new),
            assigned_to: task.assigned_to,
            assignee: task.assignee,
            start_date: task.start_date,
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            reminder_hours_before: task.reminder_hours_before,
            last_reminded_at: task.last_reminded_at,
            webhook_url: task.webhook_url,
            created_by: task.created_by,
            created_at: task.created_at,
        }
    }
}
