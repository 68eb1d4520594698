use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::validation::{
    validate_update, UpdateExperienceRequest,
};
use crate::modules::experience::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UpdatedExperienceResponse {
    pub experience: Experience,
}

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = match validate_update(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.experiences.update(id, input).await {
        Ok(experience) => HttpResponse::Ok().json(UpdatedExperienceResponse { experience }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
