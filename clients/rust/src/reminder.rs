use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskdeck_api_structs::send_task_reminders;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Triggers the task reminders job the same way the scheduled cron does
    pub async fn trigger(
        &self,
        secret: Option<String>,
    ) -> APIResponse<send_task_reminders::APIResponse> {
        let query = send_task_reminders::QueryParams { secret };
        self.base
            .get_with_query("cron/reminders".into(), &query, StatusCode::OK)
            .await
    }
}
