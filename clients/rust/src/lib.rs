mod base;
mod lookup;
mod project;
mod reminder;
mod status;
mod task;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use lookup::LookupClient;
use project::ProjectClient;
pub use project::CreateProjectInput;
use reminder::ReminderClient;
use status::StatusClient;
use std::sync::Arc;
use task::TaskClient;
pub use task::{CreateTaskInput, GetTasksInput};
use user::UserClient;

pub use taskdeck_api_structs::dtos::*;
pub use taskdeck_domain::{ProjectStatus, ReminderOutcome, TaskPriority, TaskStatus, ID};

// Domain
pub use taskdeck_api_structs::dtos::ProjectDTO as Project;
pub use taskdeck_api_structs::dtos::TaskDTO as Task;
pub use taskdeck_api_structs::dtos::UserDTO as User;

/// Taskdeck Server SDK
///
/// The SDK contains methods for interacting with the Taskdeck server
/// API.
#[derive(Clone)]
pub struct TaskdeckSDK {
    pub lookup: LookupClient,
    pub project: ProjectClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub task: TaskClient,
    pub user: UserClient,
}

impl TaskdeckSDK {
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        let base = Arc::new(base);

        Self {
            lookup: LookupClient::new(base.clone()),
            project: ProjectClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            task: TaskClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}
