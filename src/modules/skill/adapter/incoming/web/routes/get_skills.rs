use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::skill::application::validation::{validate_query, SkillQueryParams};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SkillListResponse {
    pub skills: Vec<Skill>,
}

#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<SkillQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = validate_query(query.into_inner());

    match data.skills.find_all(filter).await {
        Ok(skills) => HttpResponse::Ok().json(SkillListResponse { skills }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
