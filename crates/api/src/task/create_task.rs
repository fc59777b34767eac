use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_api_key_route,
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use taskdeck_api_structs::create_task::*;
use taskdeck_domain::{
    InvalidTaskFieldError, Project, Task, TaskAssignee, TaskPriority, TaskStatus, ID,
};
use taskdeck_infra::TaskdeckContext;

pub async fn create_task_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    let body = body.0;
    let title = Guard::against_missing_field(body.title, "Title is required")?;
    let start_date = Guard::against_malformed_date(body.start_date)?;
    let due_date = Guard::against_malformed_date(body.due_date)?;

    let usecase = CreateTaskUseCase {
        title,
        description: body.description,
        status: body.status.unwrap_or_default(),
        priority: body.priority.unwrap_or_default(),
        project_id: body.project_id,
        assigned_to: body.assigned_to,
        start_date,
        due_date,
        estimated_hours: body.estimated_hours,
        reminder_hours_before: body.reminder_hours_before,
        webhook_url: body.webhook_url,
        created_by: body.created_by,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.task, res.project.as_ref())))
        .map_err(TaskdeckError::from)
}

#[derive(Debug)]
pub struct CreateTaskUseCase {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: Option<ID>,
    pub assigned_to: Option<ID>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    pub reminder_hours_before: Option<u32>,
    /// Falls back to the configured default webhook when not given
    pub webhook_url: Option<String>,
    pub created_by: Option<ID>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub task: Task,
    pub project: Option<Project>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ProjectNotFound(ID),
    UserNotFound(ID),
    InvalidField(InvalidTaskFieldError),
    StorageError(String),
}

impl From<UseCaseError> for TaskdeckError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProjectNotFound(id) => Self::NotFound(format!(
                "The project with id: {}, was not found.",
                id
            )),
            UseCaseError::UserNotFound(id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", id))
            }
            UseCaseError::InvalidField(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError(cause) => Self::InternalError(cause),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTaskUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTask";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        let project = match &self.project_id {
            Some(project_id) => Some(
                ctx.repos
                    .projects
                    .find(project_id)
                    .await
                    .ok_or(UseCaseError::ProjectNotFound(*project_id))?,
            ),
            None => None,
        };

        let assignee = match &self.assigned_to {
            Some(user_id) => {
                let user = ctx
                    .repos
                    .users
                    .find(user_id)
                    .await
                    .ok_or(UseCaseError::UserNotFound(*user_id))?;
                Some(TaskAssignee {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                })
            }
            None => None,
        };

        if let Some(user_id) = &self.created_by {
            if ctx.repos.users.find(user_id).await.is_none() {
                return Err(UseCaseError::UserNotFound(*user_id));
            }
        }

        let mut task = Task::new(self.title.clone(), ctx.sys.get_timestamp_millis());
        task.description = self.description.clone();
        task.status = self.status;
        task.priority = self.priority;
        task.project_id = self.project_id;
        task.assigned_to = self.assigned_to;
        task.assignee = assignee;
        task.start_date = self.start_date;
        task.due_date = self.due_date;
        task.estimated_hours = self.estimated_hours;
        task.created_by = self.created_by;
        task.set_reminder_hours_before(self.reminder_hours_before)
            .map_err(UseCaseError::InvalidField)?;

        let webhook_url = self
            .webhook_url
            .clone()
            .or_else(|| ctx.config.default_task_webhook_url.clone());
        task.set_webhook_url(webhook_url)
            .map_err(UseCaseError::InvalidField)?;

        ctx.repos
            .tasks
            .insert(&task)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(UseCaseResponse { task, project })
    }
}
