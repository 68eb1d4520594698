use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::skill::application::validation::{validate_create, CreateSkillRequest};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedSkillResponse {
    pub skill: Skill,
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match validate_create(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.skills.create(input).await {
        Ok(skill) => HttpResponse::Created().json(CreatedSkillResponse { skill }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
