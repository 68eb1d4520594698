use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteExperienceResponse {
    pub message: String,
}

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteExperienceResponse {
            message: "Experience deleted successfully".to_string(),
        }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
