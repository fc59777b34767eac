use super::ITaskRepo;
use crate::repos::shared::query_structs::TaskQuery;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use taskdeck_domain::{Task, TaskAssignee, ID};
use tracing::error;

pub struct PostgresTaskRepo {
    pool: PgPool,
}

impl PostgresTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_TASKS: &str = r#"
    SELECT t.*, u.full_name AS assignee_name, u.email AS assignee_email
    FROM tasks AS t
    LEFT JOIN users AS u ON u.user_uid = t.assigned_to
"#;

#[derive(Debug, FromRow)]
struct TaskRaw {
    task_uid: Uuid,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    project_uid: Option<Uuid>,
    assigned_to: Option<Uuid>,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    estimated_hours: Option<f64>,
    reminder_hours_before: Option<i32>,
    last_reminded_at: Option<i64>,
    webhook_url: Option<String>,
    created_by: Option<Uuid>,
    created_at: i64,
    assignee_name: Option<String>,
    assignee_email: Option<String>,
}

impl TryFrom<TaskRaw> for Task {
    type Error = anyhow::Error;

    fn try_from(t: TaskRaw) -> Result<Self, Self::Error> {
        let assignee = match (t.assigned_to, t.assignee_name, t.assignee_email) {
            (Some(id), Some(name), Some(email)) => Some(TaskAssignee {
                id: id.into(),
                name,
                email,
            }),
            _ => None,
        };
        Ok(Self {
            id: t.task_uid.into(),
            title: t.title,
            description: t.description,
            status: t.status.parse()?,
            priority: t.priority.parse()?,
            project_id: t.project_uid.map(ID::from),
            assigned_to: t.assigned_to.map(ID::from),
            assignee,
            start_date: t.start_date,
            due_date: t.due_date,
            estimated_hours: t.estimated_hours,
            reminder_hours_before: t
                .reminder_hours_before
                .and_then(|hours| u32::try_from(hours).ok()),
            last_reminded_at: t.last_reminded_at,
            webhook_url: t.webhook_url,
            created_by: t.created_by.map(ID::from),
            created_at: t.created_at,
        })
    }
}

fn to_tasks(rows: Vec<TaskRaw>) -> anyhow::Result<Vec<Task>> {
    rows.into_iter().map(Task::try_from).collect()
}

#[async_trait::async_trait]
impl ITaskRepo for PostgresTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        let reminder_hours_before = task
            .reminder_hours_before
            .map(i32::try_from)
            .transpose()?;
        sqlx::query(
            r#"
            INSERT INTO tasks
            (task_uid, title, description, status, priority, project_uid, assigned_to,
             start_date, due_date, estimated_hours, reminder_hours_before,
             last_reminded_at, webhook_url, created_by, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(task.id.inner_ref())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.project_id.map(|id| id.inner()))
        .bind(task.assigned_to.map(|id| id.inner()))
        .bind(task.start_date)
        .bind(task.due_date)
        .bind(task.estimated_hours)
        .bind(reminder_hours_before)
        .bind(task.last_reminded_at)
        .bind(&task.webhook_url)
        .bind(task.created_by.map(|id| id.inner()))
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert task: {:?}. DB returned error: {:?}",
                task, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, task_id: &ID) -> Option<Task> {
        let res: Option<TaskRaw> =
            sqlx::query_as::<_, TaskRaw>(&format!("{} WHERE t.task_uid = $1", SELECT_TASKS))
                .bind(task_id.inner_ref())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!(
                        "Find task with id: {:?} failed. DB returned error: {:?}",
                        task_id, e
                    );
                    e
                })
                .ok()?;
        res.and_then(|task| Task::try_from(task).ok())
    }

    async fn find_by(&self, query: &TaskQuery) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRaw>(&format!(
            r#"{}
            WHERE ($1::uuid IS NULL OR t.project_uid = $1)
            AND ($2::text IS NULL OR t.status = $2)
            ORDER BY t.created_at DESC
            "#,
            SELECT_TASKS
        ))
        .bind(query.project_id.map(|id| id.inner()))
        .bind(query.status.map(|status| status.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find tasks with query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        to_tasks(rows)
    }

    async fn find_reminder_candidates(&self) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRaw>(&format!(
            r#"{}
            WHERE t.reminder_hours_before IS NOT NULL
            AND t.status <> 'Done'
            "#,
            SELECT_TASKS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find reminder candidates failed. DB returned error: {:?}", e);
            e
        })?;

        to_tasks(rows)
    }

    async fn set_last_reminded_at(&self, task_id: &ID, reminded_at: i64) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET last_reminded_at = $2
            WHERE task_uid = $1
            AND (last_reminded_at IS NULL OR last_reminded_at < $2)
            "#,
        )
        .bind(task_id.inner_ref())
        .bind(reminded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to set last_reminded_at for task: {:?}. DB returned error: {:?}",
                task_id, e
            );
            e
        })?;
        Ok(())
    }
}
