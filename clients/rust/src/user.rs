use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskdeck_api_structs::get_users;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Active users ordered by name
    pub async fn get_active(&self) -> APIResponse<get_users::APIResponse> {
        self.base.get("users".into(), StatusCode::OK).await
    }
}
