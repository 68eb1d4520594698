use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SingleExperienceResponse {
    pub experience: Experience,
}

#[get("/api/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.find_by_id(id).await {
        Ok(Some(experience)) => HttpResponse::Ok().json(SingleExperienceResponse { experience }),
        Ok(None) => ApiResponse::not_found("Experience not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
