use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::domain::entities::Blog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct BlogBySlugResponse {
    pub blog: Blog,
}

#[get("/api/blogs/slug/{slug}")]
pub async fn get_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blogs.find_by_slug(&slug).await {
        Ok(Some(blog)) => HttpResponse::Ok().json(BlogBySlugResponse { blog }),
        Ok(None) => ApiResponse::not_found("Blog not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
