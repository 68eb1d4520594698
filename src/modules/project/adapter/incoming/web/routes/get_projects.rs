use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::validation::{validate_query, ProjectQueryParams};
use crate::modules::project::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectQueryParams),
    responses(
        (status = 200, description = "Filtered, paginated project list", body = ProjectListResponse),
        (status = 400, description = "Unparsable query parameter", body = crate::shared::api::ErrorBody)
    ),
    tag = "projects"
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = validate_query(query.into_inner());

    match data.projects.find_all(filter).await {
        Ok(projects) => HttpResponse::Ok().json(ProjectListResponse { projects }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
