use crate::dtos::TaskDTO;
use serde::{Deserialize, Serialize};
use taskdeck_domain::{TaskPriority, TaskStatus, ID};

pub mod get_tasks {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        pub project_id: Option<String>,
        pub status: Option<String>,
    }

    pub type APIResponse = Vec<TaskDTO>;
}

pub mod create_task {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub title: Option<String>,
        pub description: Option<String>,
        pub status: Option<TaskStatus>,
        pub priority: Option<TaskPriority>,
        pub project_id: Option<ID>,
        pub assigned_to: Option<ID>,
        /// Formatted as `YYYY-MM-DD`
        pub start_date: Option<String>,
        /// Formatted as `YYYY-MM-DD`
        pub due_date: Option<String>,
        pub estimated_hours: Option<f64>,
        pub reminder_hours_before: Option<u32>,
        pub webhook_url: Option<String>,
        pub created_by: Option<ID>,
    }

    pub type APIResponse = TaskDTO;
}
