use crate::dtos::TaskReminderResultDTO;
use serde::{Deserialize, Serialize};
use taskdeck_domain::TaskReminderResult;

pub mod send_task_reminders {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        pub secret: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        /// Number of `Task`s that were due for a reminder
        pub processed: usize,
        pub results: Vec<TaskReminderResultDTO>,
    }

    impl APIResponse {
        pub fn new(results: Vec<TaskReminderResult>) -> Self {
            Self {
                processed: results.len(),
                results: results.into_iter().map(TaskReminderResultDTO::new).collect(),
            }
        }
    }
}
