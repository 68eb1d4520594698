use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::blog::application::validation::{validate_update, UpdateBlogRequest};
use crate::modules::blog::domain::entities::Blog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UpdatedBlogResponse {
    pub blog: Blog,
}

#[put("/api/blogs/{id}")]
pub async fn update_blog_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = match validate_update(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.blogs.update(id, input).await {
        Ok(blog) => HttpResponse::Ok().json(UpdatedBlogResponse { blog }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
