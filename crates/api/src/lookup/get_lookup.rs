use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_api_key_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use taskdeck_api_structs::{
    dtos::{ProjectSummaryDTO, UserDTO},
    get_lookup::*,
};
use taskdeck_domain::{Project, User};
use taskdeck_infra::TaskdeckContext;

pub async fn get_lookup_controller(
    http_req: HttpRequest,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    execute(GetLookupUseCase {}, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                projects: res.projects.iter().map(ProjectSummaryDTO::new).collect(),
                users: res.users.into_iter().map(UserDTO::new).collect(),
            })
        })
        .map_err(|e| match e {
            UseCaseError::StorageError(cause) => TaskdeckError::InternalError(cause),
        })
}

/// Options used to populate the project and assignee pickers
#[derive(Debug)]
pub struct GetLookupUseCase {}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub projects: Vec<Project>,
    pub users: Vec<User>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetLookupUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetLookup";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        let (projects, users) =
            futures::try_join!(ctx.repos.projects.find_all(), ctx.repos.users.find_active())
                .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(UseCaseResponse { projects, users })
    }
}
