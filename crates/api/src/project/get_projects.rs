use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_api_key_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use taskdeck_api_structs::{dtos::ProjectDTO, get_projects::*};
use taskdeck_domain::Project;
use taskdeck_infra::TaskdeckContext;

pub async fn get_projects_controller(
    http_req: HttpRequest,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    execute(GetProjectsUseCase {}, &ctx)
        .await
        .map(|projects| {
            let projects: APIResponse = projects.into_iter().map(ProjectDTO::new).collect();
            HttpResponse::Ok().json(projects)
        })
        .map_err(|e| match e {
            UseCaseError::StorageError(cause) => TaskdeckError::InternalError(cause),
        })
}

#[derive(Debug)]
pub struct GetProjectsUseCase {}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProjectsUseCase {
    type Response = Vec<Project>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProjects";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .projects
            .find_all()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
