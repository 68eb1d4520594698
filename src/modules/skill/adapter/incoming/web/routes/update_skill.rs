use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::skill::application::validation::{validate_update, UpdateSkillRequest};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UpdatedSkillResponse {
    pub skill: Skill,
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = match validate_update(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.skills.update(id, input).await {
        Ok(skill) => HttpResponse::Ok().json(UpdatedSkillResponse { skill }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
