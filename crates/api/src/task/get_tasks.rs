use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_api_key_route,
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use std::collections::HashMap;
use taskdeck_api_structs::{dtos::TaskDTO, get_tasks::*};
use taskdeck_domain::{Project, Task, TaskStatus, ID};
use taskdeck_infra::{TaskQuery, TaskdeckContext};

pub async fn get_tasks_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    let query = query.0;
    let project_id = match query.project_id {
        Some(id) => Some(Guard::against_malformed_id(id)?),
        None => None,
    };
    let status = match query.status {
        Some(status) => Some(
            status
                .parse::<TaskStatus>()
                .map_err(|e| TaskdeckError::BadClientData(e.to_string()))?,
        ),
        None => None,
    };

    let usecase = GetTasksUseCase {
        query: TaskQuery { project_id, status },
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let projects = res.projects;
            let tasks: APIResponse = res
                .tasks
                .into_iter()
                .map(|task| {
                    let project = task.project_id.and_then(|id| projects.get(&id));
                    TaskDTO::new(task, project)
                })
                .collect();
            HttpResponse::Ok().json(tasks)
        })
        .map_err(|e| match e {
            UseCaseError::StorageError(cause) => TaskdeckError::InternalError(cause),
        })
}

#[derive(Debug)]
pub struct GetTasksUseCase {
    pub query: TaskQuery,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub tasks: Vec<Task>,
    /// The `Project`s referenced by the returned `Task`s
    pub projects: HashMap<ID, Project>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTasksUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTasks";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        let tasks = ctx
            .repos
            .tasks
            .find_by(&self.query)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        let mut project_ids: Vec<ID> = tasks.iter().filter_map(|t| t.project_id).collect();
        project_ids.sort_by_key(|id| id.inner());
        project_ids.dedup();

        let projects = if project_ids.is_empty() {
            HashMap::new()
        } else {
            ctx.repos
                .projects
                .find_many(&project_ids)
                .await
                .map_err(|e| UseCaseError::StorageError(e.to_string()))?
                .into_iter()
                .map(|project| (project.id, project))
                .collect()
        };

        Ok(UseCaseResponse { tasks, projects })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_domain::User;

    #[actix_web::test]
    async fn it_filters_tasks_and_resolves_their_projects() {
        let ctx = TaskdeckContext::create_inmemory();
        let owner = User::new("Owner".into(), "owner@example.com".into());
        ctx.repos.users.insert(&owner).await.unwrap();
        let project = Project::new("Launch".into(), owner.id, 0);
        ctx.repos.projects.insert(&project).await.unwrap();

        let mut in_project = Task::new("Write copy".into(), 1);
        in_project.project_id = Some(project.id);
        let mut done = Task::new("Pick a name".into(), 2);
        done.project_id = Some(project.id);
        done.status = TaskStatus::Done;
        let unrelated = Task::new("Water plants".into(), 3);
        for task in &[&in_project, &done, &unrelated] {
            ctx.repos.tasks.insert(task).await.unwrap();
        }

        let usecase = GetTasksUseCase {
            query: TaskQuery {
                project_id: Some(project.id),
                status: Some(TaskStatus::Todo),
            },
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.tasks.len(), 1);
        assert_eq!(res.tasks[0].id, in_project.id);
        assert_eq!(res.projects.len(), 1);
        assert_eq!(res.projects.get(&project.id).map(|p| p.name.as_str()), Some("Launch"));
    }

    #[actix_web::test]
    async fn it_returns_newest_tasks_first() {
        let ctx = TaskdeckContext::create_inmemory();
        let older = Task::new("Older".into(), 1);
        let newer = Task::new("Newer".into(), 2);
        ctx.repos.tasks.insert(&older).await.unwrap();
        ctx.repos.tasks.insert(&newer).await.unwrap();

        let usecase = GetTasksUseCase {
            query: TaskQuery::default(),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        let ids: Vec<ID> = res.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
        assert!(res.projects.is_empty());
    }
}
