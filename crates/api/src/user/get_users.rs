use crate::{
    error::TaskdeckError,
    shared::{
        auth::protect_api_key_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use taskdeck_api_structs::{dtos::UserDTO, get_users::*};
use taskdeck_domain::User;
use taskdeck_infra::TaskdeckContext;

pub async fn get_users_controller(
    http_req: HttpRequest,
    ctx: web::Data<TaskdeckContext>,
) -> Result<HttpResponse, TaskdeckError> {
    protect_api_key_route(&http_req, &ctx)?;

    execute(GetActiveUsersUseCase {}, &ctx)
        .await
        .map(|users| {
            let users: APIResponse = users.into_iter().map(UserDTO::new).collect();
            HttpResponse::Ok().json(users)
        })
        .map_err(TaskdeckError::from)
}

#[derive(Debug)]
pub struct GetActiveUsersUseCase {}

#[derive(Debug)]
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

#[async_trait::async_trait(?Send)]
impl UseCase for GetActiveUsersUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetActiveUsers";

    async fn execute(&mut self, ctx: &TaskdeckContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find_active()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
