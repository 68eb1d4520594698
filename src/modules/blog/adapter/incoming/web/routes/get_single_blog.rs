use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::blog::domain::entities::Blog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SingleBlogResponse {
    pub blog: Blog,
}

#[get("/api/blogs/{id}")]
pub async fn get_single_blog_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blogs.find_by_id(id).await {
        Ok(Some(blog)) => HttpResponse::Ok().json(SingleBlogResponse { blog }),
        Ok(None) => ApiResponse::not_found("Blog not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
