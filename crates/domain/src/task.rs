use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Upper bound for `Task::reminder_hours_before`, the largest value the store can hold
pub const MAX_REMINDER_HOURS_BEFORE: u32 = i32::MAX as u32;

/// A `Task` is a unit of work inside a `Project` which can be assigned to a `User`
/// and optionally reminded about some hours before it starts or is due.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: Option<ID>,
    pub assigned_to: Option<ID>,
    /// Display information about the assigned `User`, resolved when the `Task` is read
    pub assignee: Option<TaskAssignee>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    /// How many hours before `start_date` or `due_date` a reminder should be sent.
    /// `None` means that the `Task` should never be reminded about.
    pub reminder_hours_before: Option<u32>,
    /// Timestamp in millis of the last successfully sent reminder
    pub last_reminded_at: Option<i64>,
    /// Endpoint which receives the reminder notifications
    pub webhook_url: Option<String>,
    pub created_by: Option<ID>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssignee {
    pub id: ID,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Todo")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "Done")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTaskFieldError {
    #[error("Invalid task status: {0}")]
    Status(String),
    #[error("Invalid task priority: {0}")]
    Priority(String),
    #[error("Malformed url or scheme is not http(s): {0}")]
    WebhookUrl(String),
    #[error("Reminder hours before is out of range: {0}")]
    ReminderHoursBefore(u32),
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = InvalidTaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Todo" => Ok(Self::Todo),
            "In Progress" => Ok(Self::InProgress),
            "Review" => Ok(Self::Review),
            "Done" => Ok(Self::Done),
            _ => Err(InvalidTaskFieldError::Status(s.to_string())),
        }
    }
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = InvalidTaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Urgent" => Ok(Self::Urgent),
            _ => Err(InvalidTaskFieldError::Priority(s.to_string())),
        }
    }
}

impl Task {
    pub fn new(title: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            title,
            description: None,
            status: Default::default(),
            priority: Default::default(),
            project_id: None,
            assigned_to: None,
            assignee: None,
            start_date: None,
            due_date: None,
            estimated_hours: None,
            reminder_hours_before: None,
            last_reminded_at: None,
            webhook_url: None,
            created_by: None,
            created_at,
        }
    }

    /// Zero hours is treated the same as no reminder at all
    pub fn set_reminder_hours_before(
        &mut self,
        hours: Option<u32>,
    ) -> Result<(), InvalidTaskFieldError> {
        match hours {
            Some(hours) if hours > MAX_REMINDER_HOURS_BEFORE => {
                Err(InvalidTaskFieldError::ReminderHoursBefore(hours))
            }
            hours => {
                self.reminder_hours_before = hours.filter(|h| *h > 0);
                Ok(())
            }
        }
    }

    pub fn set_webhook_url(&mut self, webhook_url: Option<String>) -> Result<(), InvalidTaskFieldError> {
        match webhook_url {
            Some(url) if url.is_empty() => {
                self.webhook_url = None;
            }
            Some(url) => {
                let parsed_url = url::Url::parse(&url)
                    .map_err(|_| InvalidTaskFieldError::WebhookUrl(url.clone()))?;
                let allowed_schemes = ["https", "http"];
                if !allowed_schemes.contains(&parsed_url.scheme()) {
                    return Err(InvalidTaskFieldError::WebhookUrl(url));
                }
                self.webhook_url = Some(url);
            }
            None => {
                self.webhook_url = None;
            }
        };
        Ok(())
    }

    /// Display name of the assignee which is used in notifications
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.name.as_str())
    }
}

impl Entity for Task {
    fn id(&self) -> &ID {
        &self.id
    }
}
