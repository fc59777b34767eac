use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskdeck_api_structs::get_lookup;

#[derive(Clone)]
pub struct LookupClient {
    base: Arc<BaseClient>,
}

impl LookupClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_lookup::APIResponse> {
        self.base.get("lookup".into(), StatusCode::OK).await
    }
}
