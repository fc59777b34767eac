use serde::{Deserialize, Serialize};
use taskdeck_domain::{ReminderOutcome, TaskReminderResult, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskReminderResultDTO {
    pub id: ID,
    pub status: ReminderOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskReminderResultDTO {
    pub fn new(result: TaskReminderResult) -> Self {
        Self {
            id: result.task_id,
            status: result.outcome,
            error: result.error,
        }
    }
}
