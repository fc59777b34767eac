use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskdeck_api_structs::{create_task, get_tasks};
use taskdeck_domain::{TaskStatus, ID};

#[derive(Clone)]
pub struct TaskClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default)]
pub struct GetTasksInput {
    pub project_id: Option<ID>,
    pub status: Option<TaskStatus>,
}

pub type CreateTaskInput = create_task::RequestBody;

impl TaskClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_many(&self, input: GetTasksInput) -> APIResponse<get_tasks::APIResponse> {
        let query = get_tasks::QueryParams {
            project_id: input.project_id.map(|id| id.to_string()),
            status: input.status.map(|status| status.as_str().to_string()),
        };
        self.base
            .get_with_query("tasks".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn create(&self, input: CreateTaskInput) -> APIResponse<create_task::APIResponse> {
        self.base
            .post(input, "tasks".into(), StatusCode::CREATED)
            .await
    }
}
