use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SingleSkillResponse {
    pub skill: Skill,
}

#[get("/api/skills/{id}")]
pub async fn get_single_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.find_by_id(id).await {
        Ok(Some(skill)) => HttpResponse::Ok().json(SingleSkillResponse { skill }),
        Ok(None) => ApiResponse::not_found("Skill not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
