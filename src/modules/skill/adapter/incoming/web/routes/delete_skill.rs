use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteSkillResponse {
    pub message: String,
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteSkillResponse {
            message: "Skill deleted successfully".to_string(),
        }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
