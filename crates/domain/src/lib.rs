mod date;
mod project;
mod reminder;
mod shared;
mod task;
mod user;

pub use date::{date_to_timestamp_millis, parse_date};
pub use project::{InvalidProjectStatusError, Project, ProjectStatus};
pub use reminder::{
    reminder_message, select_tasks_to_remind, ReminderOutcome, ReminderWindow,
    TaskReminderNotification, TaskReminderResult, REMINDER_COOLDOWN_MILLIS,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use task::{
    InvalidTaskFieldError, Task, TaskAssignee, TaskPriority, TaskStatus, MAX_REMINDER_HOURS_BEFORE,
};
pub use user::User;
