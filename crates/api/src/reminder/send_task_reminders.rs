use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_cron_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use futures::{stream, StreamExt};
use std::fmt::Debug;
use taskdeck_api_structs::send_task_reminders::{APIResponse, QueryParams};
use taskdeck_domain::{
    select_tasks_to_remind, Task, TaskReminderNotification, TaskReminderResult,
};
use taskdeck_infra::{
    IEmailSender, ITaskNotifier, NoopEmailSender, TaskdeckContext, WebhookNotifier,
};
use tracing::{error, info, warn};

pub async fn send_task_reminders_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_cron_route(query.secret.as_deref(), &ctx)?;

    let usecase = SendTaskRemindersUseCase::for_invocation(&ctx)?;

    execute(usecase, &ctx)
        .await
        .map(|results| HttpResponse::Ok().json(APIResponse::new(results)))
        .map_err(TaskdeckError::from)
}

/// Finds every `Task` that is inside one of its reminder windows, notifies its
/// webhook and marks it as reminded.
pub struct SendTaskRemindersUseCase {
    pub notifier: Box<dyn ITaskNotifier>,
    pub email_sender: Box<dyn IEmailSender>,
    /// Maximum number of `Task`s reminded at the same time
    pub concurrency: usize,
}

impl Debug for SendTaskRemindersUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendTaskRemindersUseCase")
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl SendTaskRemindersUseCase {
    /// The notifier lives for a single invocation of the job and is dropped with the use case
    pub fn for_invocation(ctx: &TaskdeckContext) -> Result<Self, TaskdeckError> {
        let notifier = WebhookNotifier::new(ctx.config.reminder_webhook_timeout).map_err(|e| {
            error!("Unable to create webhook client: {:?}", e);
            TaskdeckError::InternalError(format!("Unable to create webhook client: {}", e))
        })?;

        Ok(Self {
            notifier: Box::new(notifier),
            email_sender: Box::new(NoopEmailSender {}),
            concurrency: ctx.config.reminder_dispatch_concurrency,
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for TaskdeckError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(cause) => Self::InternalError(cause),
        }
    }
}

async fn remind_task(
    notifier: &dyn ITaskNotifier,
    email_sender: &dyn IEmailSender,
    task: Task,
    now: i64,
    ctx: &TaskdeckContext,
) -> TaskReminderResult {
    let notification = TaskReminderNotification::new(&task);

    if let Some(webhook_url) = &task.webhook_url {
        if let Err(e) = notifier.notify(webhook_url, &notification).await {
            warn!("Unable to send reminder for task: {}. Error: {}", task.id, e);
            return TaskReminderResult::failed(task.id, e.to_string());
        }
    }

    if let Some(assignee) = &task.assignee {
        let subject = format!("Reminder: {}", task.title);
        if let Err(e) = email_sender
            .send(&assignee.email, &subject, &notification.text)
            .await
        {
            warn!("Unable to email reminder for task: {}. Error: {:?}", task.id, e);
        }
    }

    match ctx.repos.tasks.set_last_reminded_at(&task.id, now).await {
        Ok(_) => TaskReminderResult::reminded(task.id),
        Err(e) => TaskReminderResult::failed(task.id, format!("Unable to store reminder: {}", e)),
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTaskRemindersUseCase {
    type Response = Vec<TaskReminderResult>;

    type Error = UseCaseError;

    const NAME: &'static str = "SendTaskReminders";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();

        let candidates = ctx
            .repos
            .tasks
            .find_reminder_candidates()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        let tasks = select_tasks_to_remind(candidates, now);
        info!(
            "Reminding about {} tasks at {}",
            tasks.len(),
            ctx.sys.get_datetime()
        );

        let notifier = self.notifier.as_ref();
        let email_sender = self.email_sender.as_ref();
        let results = stream::iter(tasks)
            .map(|task| remind_task(notifier, email_sender, task, now, ctx))
            .buffer_unordered(self.concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, App};
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};
    use taskdeck_api_structs::ErrorResponse;
    use taskdeck_domain::{ReminderOutcome, TaskAssignee, TaskStatus, ID};
    use taskdeck_infra::{Environment, ITaskRepo, NotifyError, StaticTimeSys, TaskQuery};

    // Sun Feb 21 2021 00:00:00 UTC
    const DUE_MIDNIGHT: i64 = 1613865600000;
    const HOUR: i64 = 1000 * 60 * 60;

    /// Records every notification and fails for urls containing "fail"
    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(String, TaskReminderNotification)>>>,
    }

    #[async_trait::async_trait]
    impl ITaskNotifier for RecordingNotifier {
        async fn notify(
            &self,
            webhook_url: &str,
            notification: &TaskReminderNotification,
        ) -> Result<(), NotifyError> {
            if webhook_url.contains("fail") {
                return Err(NotifyError::UnexpectedStatusCode(500));
            }
            self.sent
                .lock()
                .unwrap()
                .push((webhook_url.to_string(), notification.clone()));
            Ok(())
        }
    }

    fn setup_context(now: i64) -> TaskdeckContext {
        let mut ctx = TaskdeckContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(now));
        ctx
    }

    fn usecase(notifier: &RecordingNotifier) -> SendTaskRemindersUseCase {
        SendTaskRemindersUseCase {
            notifier: Box::new(notifier.clone()),
            email_sender: Box::new(NoopEmailSender {}),
            concurrency: 4,
        }
    }

    fn due_task(webhook_url: Option<&str>) -> Task {
        let mut task = Task::new("Send invoice".into(), 0);
        task.set_reminder_hours_before(Some(3)).unwrap();
        task.due_date = NaiveDate::from_ymd_opt(2021, 2, 21);
        task.webhook_url = webhook_url.map(String::from);
        task
    }

    async fn insert(ctx: &TaskdeckContext, tasks: &[&Task]) {
        for task in tasks {
            ctx.repos.tasks.insert(task).await.unwrap();
        }
    }

    #[actix_web::test]
    async fn reminds_due_task_and_marks_it() {
        let now = DUE_MIDNIGHT - 2 * HOUR;
        let ctx = setup_context(now);
        let mut task = due_task(Some("https://hooks.example.com/a"));
        task.assignee = Some(TaskAssignee {
            id: ID::new(),
            name: "Linus".into(),
            email: "linus@example.com".into(),
        });
        insert(&ctx, &[&task]).await;

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await.unwrap();
        assert_eq!(res, vec![TaskReminderResult::reminded(task.id)]);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://hooks.example.com/a");
        assert_eq!(sent[0].1.task_id, task.id);
        assert_eq!(sent[0].1.assignee.as_deref(), Some("Linus"));

        let stored = ctx.repos.tasks.find(&task.id).await.unwrap();
        assert_eq!(stored.last_reminded_at, Some(now));
    }

    #[actix_web::test]
    async fn skips_ineligible_tasks() {
        let now = DUE_MIDNIGHT - 2 * HOUR;
        let ctx = setup_context(now);
        let mut done = due_task(Some("https://hooks.example.com/done"));
        done.status = TaskStatus::Done;
        let mut no_reminder = due_task(Some("https://hooks.example.com/none"));
        no_reminder.set_reminder_hours_before(None).unwrap();
        let mut cooling_down = due_task(Some("https://hooks.example.com/cool"));
        cooling_down.last_reminded_at = Some(now - 10 * HOUR);
        let mut too_early = due_task(Some("https://hooks.example.com/early"));
        too_early.due_date = NaiveDate::from_ymd_opt(2021, 2, 22);
        insert(&ctx, &[&done, &no_reminder, &cooling_down, &too_early]).await;

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await.unwrap();
        assert!(res.is_empty());
        assert!(notifier.sent.lock().unwrap().is_empty());

        let stored = ctx.repos.tasks.find(&cooling_down.id).await.unwrap();
        assert_eq!(stored.last_reminded_at, Some(now - 10 * HOUR));
    }

    #[actix_web::test]
    async fn webhook_failure_does_not_stop_other_tasks() {
        let now = DUE_MIDNIGHT - HOUR;
        let ctx = setup_context(now);
        let failing = due_task(Some("https://hooks.example.com/fail"));
        let succeeding = due_task(Some("https://hooks.example.com/ok"));
        insert(&ctx, &[&failing, &succeeding]).await;

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await.unwrap();
        assert_eq!(res.len(), 2);

        let failed = res.iter().find(|r| r.task_id == failing.id).unwrap();
        assert_eq!(failed.outcome, ReminderOutcome::Failed);
        assert_eq!(
            failed.error.as_deref(),
            Some("Webhook responded with status code: 500")
        );
        let reminded = res.iter().find(|r| r.task_id == succeeding.id).unwrap();
        assert_eq!(reminded.outcome, ReminderOutcome::Reminded);

        // Failed dispatches are retried on the next invocation
        let stored = ctx.repos.tasks.find(&failing.id).await.unwrap();
        assert!(stored.last_reminded_at.is_none());
        let stored = ctx.repos.tasks.find(&succeeding.id).await.unwrap();
        assert_eq!(stored.last_reminded_at, Some(now));
    }

    #[actix_web::test]
    async fn task_without_webhook_is_still_marked() {
        let now = DUE_MIDNIGHT - HOUR;
        let ctx = setup_context(now);
        let task = due_task(None);
        insert(&ctx, &[&task]).await;

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await.unwrap();
        assert_eq!(res, vec![TaskReminderResult::reminded(task.id)]);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn task_is_reminded_once_for_both_windows() {
        let now = DUE_MIDNIGHT - HOUR;
        let ctx = setup_context(now);
        let mut task = due_task(Some("https://hooks.example.com/both"));
        task.start_date = task.due_date;
        insert(&ctx, &[&task]).await;

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn second_invocation_respects_cooldown() {
        let now = DUE_MIDNIGHT - 2 * HOUR;
        let ctx = setup_context(now);
        let task = due_task(Some("https://hooks.example.com/a"));
        insert(&ctx, &[&task]).await;

        let notifier = RecordingNotifier::default();
        assert_eq!(execute(usecase(&notifier), &ctx).await.unwrap().len(), 1);

        let mut later_ctx = ctx.clone();
        later_ctx.sys = Arc::new(StaticTimeSys(now + HOUR));
        assert!(execute(usecase(&notifier), &later_ctx)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    /// Store whose reads always fail
    struct UnavailableTaskRepo {}

    #[async_trait::async_trait]
    impl ITaskRepo for UnavailableTaskRepo {
        async fn insert(&self, _task: &Task) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database is unavailable"))
        }

        async fn find(&self, _task_id: &ID) -> Option<Task> {
            None
        }

        async fn find_by(&self, _query: &TaskQuery) -> anyhow::Result<Vec<Task>> {
            Err(anyhow::anyhow!("database is unavailable"))
        }

        async fn find_reminder_candidates(&self) -> anyhow::Result<Vec<Task>> {
            Err(anyhow::anyhow!("database is unavailable"))
        }

        async fn set_last_reminded_at(&self, _task_id: &ID, _at: i64) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database is unavailable"))
        }
    }

    fn unavailable_store_context() -> TaskdeckContext {
        let mut ctx = setup_context(DUE_MIDNIGHT - 2 * HOUR);
        ctx.repos.tasks = Arc::new(UnavailableTaskRepo {});
        ctx.config.environment = Environment::Development;
        ctx
    }

    #[actix_web::test]
    async fn failing_store_read_aborts_the_invocation() {
        let ctx = unavailable_store_context();

        let notifier = RecordingNotifier::default();
        let res = execute(usecase(&notifier), &ctx).await;
        assert_eq!(
            res,
            Err(UseCaseError::StorageError("database is unavailable".into()))
        );
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn failing_store_read_responds_with_json_error() {
        let ctx = unavailable_store_context();
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(crate::reminder::configure_routes),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/cron/reminders")
            .to_request();
        let res = actix_web::test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = actix_web::test::read_body_json(res).await;
        assert_eq!(body.error, "Internal server error: database is unavailable");
    }
}
