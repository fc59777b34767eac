use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskdeck_api_structs::{create_project, get_projects};

#[derive(Clone)]
pub struct ProjectClient {
    base: Arc<BaseClient>,
}

pub type CreateProjectInput = create_project::RequestBody;

impl ProjectClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_many(&self) -> APIResponse<get_projects::APIResponse> {
        self.base.get("projects".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CreateProjectInput,
    ) -> APIResponse<create_project::APIResponse> {
        self.base
            .post(input, "projects".into(), StatusCode::CREATED)
            .await
    }
}
