use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteProjectResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Deleted (idempotent)", body = DeleteProjectResponse)
    ),
    tag = "projects"
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteProjectResponse {
            message: "Project deleted successfully".to_string(),
        }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
