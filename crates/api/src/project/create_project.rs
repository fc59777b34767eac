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
use taskdeck_api_structs::create_project::*;
use taskdeck_domain::{Project, ProjectStatus, ID};
use taskdeck_infra::TaskdeckContext;

pub async fn create_project_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    let body = body.0;
    let name = Guard::against_missing_field(body.name, "Name is required")?;
    let created_by = body
        .created_by
        .ok_or_else(|| TaskdeckError::BadClientData("Created by is required".into()))?;
    let start_date = Guard::against_malformed_date(body.start_date)?;
    let end_date = Guard::against_malformed_date(body.end_date)?;

    let usecase = CreateProjectUseCase {
        name,
        description: body.description,
        status: body.status.unwrap_or_default(),
        start_date,
        end_date,
        created_by,
    };

    execute(usecase, &ctx)
        .await
        .map(|project| HttpResponse::Created().json(APIResponse::new(project)))
        .map_err(|e| match e {
            UseCaseError::UserNotFound(id) => {
                TaskdeckError::NotFound(format!("The user with id: {}, was not found.", id))
            }
            UseCaseError::StorageError(cause) => TaskdeckError::InternalError(cause),
        })
}

#[derive(Debug)]
pub struct CreateProjectUseCase {
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound(ID),
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateProjectUseCase {
    type Response = Project;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateProject";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find(&self.created_by).await.is_none() {
            return Err(UseCaseError::UserNotFound(self.created_by));
        }

        let mut project = Project::new(
            self.name.clone(),
            self.created_by,
            ctx.sys.get_timestamp_millis(),
        );
        project.description = self.description.clone();
        project.status = self.status;
        project.start_date = self.start_date;
        project.end_date = self.end_date;

        ctx.repos
            .projects
            .insert(&project)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::get_projects::GetProjectsUseCase;
    use std::sync::Arc;
    use taskdeck_domain::User;
    use taskdeck_infra::StaticTimeSys;

    fn usecase(name: &str, created_by: ID) -> CreateProjectUseCase {
        CreateProjectUseCase {
            name: name.into(),
            description: None,
            status: Default::default(),
            start_date: None,
            end_date: None,
            created_by,
        }
    }

    #[actix_web::test]
    async fn it_creates_and_lists_projects() {
        let mut ctx = TaskdeckContext::create_inmemory();
        let owner = User::new("Owner".into(), "owner@example.com".into());
        ctx.repos.users.insert(&owner).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(10));
        let first = execute(usecase("First", owner.id), &ctx).await.unwrap();
        assert_eq!(first.status, ProjectStatus::Planning);
        assert_eq!(first.created_at, 10);

        ctx.sys = Arc::new(StaticTimeSys(20));
        let second = execute(usecase("Second", owner.id), &ctx).await.unwrap();

        let projects = execute(GetProjectsUseCase {}, &ctx).await.unwrap();
        let ids: Vec<ID> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[actix_web::test]
    async fn it_rejects_unknown_creator() {
        let ctx = TaskdeckContext::create_inmemory();
        let created_by = ID::new();

        let res = execute(usecase("Orphan", created_by), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::UserNotFound(created_by));
    }
}
