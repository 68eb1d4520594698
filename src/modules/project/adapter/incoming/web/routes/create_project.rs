use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::validation::{validate_create, CreateProjectRequest};
use crate::modules::project::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedProjectResponse {
    pub project: Project,
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, body = CreatedProjectResponse),
        (status = 400, description = "Field-level validation failure", body = crate::shared::api::ErrorBody),
        (status = 409, description = "Duplicate resource", body = crate::shared::api::ErrorBody)
    ),
    tag = "projects"
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match validate_create(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.projects.create(input).await {
        Ok(project) => HttpResponse::Created().json(CreatedProjectResponse { project }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
