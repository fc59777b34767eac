use crate::{
    date::date_to_timestamp_millis,
    shared::entity::ID,
    task::{Task, TaskPriority, TaskStatus},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: i64 = 1000 * 60 * 60;

/// Minimum time between two reminders for the same `Task`
pub const REMINDER_COOLDOWN_MILLIS: i64 = 23 * MILLIS_PER_HOUR;

/// The half open interval `[date - reminder_hours_before, date)` in which
/// a `Task` should be reminded about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReminderWindow {
    pub start_ts: i64,
    pub end_ts: i64,
}

impl ReminderWindow {
    pub fn new(date: &NaiveDate, hours_before: u32) -> Self {
        let end_ts = date_to_timestamp_millis(date);
        Self {
            start_ts: end_ts - i64::from(hours_before) * MILLIS_PER_HOUR,
            end_ts,
        }
    }

    pub fn contains(&self, ts: i64) -> bool {
        self.start_ts <= ts && ts < self.end_ts
    }
}

impl Task {
    pub fn is_reminder_eligible(&self) -> bool {
        self.reminder_hours_before.is_some() && self.status != TaskStatus::Done
    }

    pub fn in_reminder_cooldown(&self, now: i64) -> bool {
        match self.last_reminded_at {
            Some(last_reminded_at) => now - last_reminded_at < REMINDER_COOLDOWN_MILLIS,
            None => false,
        }
    }

    /// Windows for the `start_date` and `due_date` that are set
    pub fn reminder_windows(&self) -> Vec<ReminderWindow> {
        let hours_before = match self.reminder_hours_before {
            Some(hours) => hours,
            None => return Vec::new(),
        };

        [self.start_date, self.due_date]
            .iter()
            .flatten()
            .map(|date| ReminderWindow::new(date, hours_before))
            .collect()
    }

    /// Whether a reminder for this `Task` should be sent at `now`
    pub fn should_remind(&self, now: i64) -> bool {
        if !self.is_reminder_eligible() || self.in_reminder_cooldown(now) {
            return false;
        }
        self.reminder_windows().iter().any(|w| w.contains(now))
    }
}

/// Picks out the `Task`s that should be reminded about at `now`.
/// Every `Task` is returned at most once even if both of its windows are open.
pub fn select_tasks_to_remind(tasks: Vec<Task>, now: i64) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.should_remind(now)).collect()
}

/// The payload which is delivered to the webhook of a `Task`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReminderNotification {
    pub text: String,
    pub task_id: ID,
    pub title: String,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
}

impl TaskReminderNotification {
    pub fn new(task: &Task) -> Self {
        Self {
            text: reminder_message(task),
            task_id: task.id,
            title: task.title.clone(),
            priority: task.priority,
            assignee: task.assignee_name().map(String::from),
        }
    }
}

pub fn reminder_message(task: &Task) -> String {
    format!(
        "Reminder: Task \"{}\" is coming up! Due/Start in {} hours.",
        task.title,
        task.reminder_hours_before.unwrap_or_default()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderOutcome {
    Reminded,
    Failed,
}

/// Result of trying to remind about a single `Task`
#[derive(Debug, Clone, PartialEq)]
pub struct TaskReminderResult {
    pub task_id: ID,
    pub outcome: ReminderOutcome,
    pub error: Option<String>,
}

impl TaskReminderResult {
    pub fn reminded(task_id: ID) -> Self {
        Self {
            task_id,
            outcome: ReminderOutcome::Reminded,
            error: None,
        }
    }

    pub fn failed(task_id: ID, error: String) -> Self {
        Self {
            task_id,
            outcome: ReminderOutcome::Failed,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::task::TaskAssignee;

    const HOUR: i64 = MILLIS_PER_HOUR;

    fn midnight() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 2, 21).unwrap()
    }

    // Midnight UTC of `midnight()`
    fn midnight_ts() -> i64 {
        1613865600000
    }

    fn task_factory(hours_before: Option<u32>) -> Task {
        let mut task = Task::new("Ship release".into(), 0);
        task.reminder_hours_before = hours_before;
        task
    }

    #[test]
    fn it_skips_tasks_without_reminder_or_done() {
        let now = midnight_ts() - HOUR;
        let mut task = task_factory(None);
        task.due_date = Some(midnight());
        assert!(!task.should_remind(now));

        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());
        task.status = TaskStatus::Done;
        assert!(!task.should_remind(now));

        task.status = TaskStatus::Review;
        assert!(task.should_remind(now));
    }

    #[test]
    fn due_date_inside_window_qualifies() {
        // due_date = now + 2h, reminder 3h before
        let now = midnight_ts() - 2 * HOUR;
        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());
        assert!(task.should_remind(now));
    }

    #[test]
    fn due_date_before_window_does_not_qualify() {
        // due_date = now + 5h, reminder 3h before
        let now = midnight_ts() - 5 * HOUR;
        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());
        assert!(!task.should_remind(now));
    }

    #[test]
    fn passed_due_date_does_not_qualify() {
        // due_date = now - 1h
        let now = midnight_ts() + HOUR;
        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());
        assert!(!task.should_remind(now));
    }

    #[test]
    fn window_is_half_open() {
        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());
        assert!(task.should_remind(midnight_ts() - 3 * HOUR));
        assert!(!task.should_remind(midnight_ts() - 3 * HOUR - 1));
        assert!(task.should_remind(midnight_ts() - 1));
        assert!(!task.should_remind(midnight_ts()));
    }

    #[test]
    fn start_date_window_qualifies_on_its_own() {
        let now = midnight_ts() - HOUR;
        let mut task = task_factory(Some(2));
        task.start_date = Some(midnight());
        task.due_date = NaiveDate::from_ymd_opt(2021, 3, 1);
        assert!(task.should_remind(now));
    }

    #[test]
    fn it_respects_cooldown() {
        let now = midnight_ts() - HOUR;
        let mut task = task_factory(Some(3));
        task.due_date = Some(midnight());

        task.last_reminded_at = Some(now - 22 * HOUR);
        assert!(!task.should_remind(now));
        task.last_reminded_at = Some(now - REMINDER_COOLDOWN_MILLIS + 1);
        assert!(!task.should_remind(now));
        task.last_reminded_at = Some(now - REMINDER_COOLDOWN_MILLIS);
        assert!(task.should_remind(now));
        task.last_reminded_at = Some(now - 48 * HOUR);
        assert!(task.should_remind(now));
    }

    #[test]
    fn task_with_both_windows_open_is_selected_once() {
        let now = midnight_ts() - HOUR;
        let mut task = task_factory(Some(3));
        task.start_date = Some(midnight());
        task.due_date = Some(midnight());
        assert_eq!(task.reminder_windows().len(), 2);

        let selected = select_tasks_to_remind(vec![task.clone()], now);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, task.id);
    }

    #[test]
    fn selects_only_qualifying_tasks() {
        let now = midnight_ts() - HOUR;
        let mut remind = task_factory(Some(3));
        remind.due_date = Some(midnight());
        let mut too_early = task_factory(Some(3));
        too_early.due_date = NaiveDate::from_ymd_opt(2021, 2, 22);
        let no_dates = task_factory(Some(3));

        let selected = select_tasks_to_remind(vec![too_early, remind.clone(), no_dates], now);
        assert_eq!(selected, vec![remind]);
    }

    #[test]
    fn it_creates_notification_payload() {
        let mut task = task_factory(Some(3));
        task.priority = TaskPriority::High;
        task.assignee = Some(TaskAssignee {
            id: Default::default(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        });

        let notification = TaskReminderNotification::new(&task);
        assert_eq!(
            notification.text,
            "Reminder: Task \"Ship release\" is coming up! Due/Start in 3 hours."
        );
        assert_eq!(notification.task_id, task.id);
        assert_eq!(notification.assignee.as_deref(), Some("Ada Lovelace"));

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["priority"], "High");
        assert_eq!(json["task_id"], task.id.as_string());
        assert_eq!(json["title"], "Ship release");
    }

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReminderOutcome::Reminded).unwrap(),
            "\"reminded\""
        );
        assert_eq!(
            serde_json::to_string(&ReminderOutcome::Failed).unwrap(),
            "\"failed\""
        );
    }
}
