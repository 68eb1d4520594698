use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::experience::application::validation::{validate_query, ExperienceQueryParams};
use crate::modules::experience::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ExperienceListResponse {
    pub experiences: Vec<Experience>,
}

#[get("/api/experiences")]
pub async fn get_experiences_handler(
    query: web::Query<ExperienceQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = validate_query(query.into_inner());

    match data.experiences.find_all(filter).await {
        Ok(experiences) => HttpResponse::Ok().json(ExperienceListResponse { experiences }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
