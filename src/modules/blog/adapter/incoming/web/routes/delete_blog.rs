use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteBlogResponse {
    pub message: String,
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blogs.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteBlogResponse {
            message: "Blog deleted successfully".to_string(),
        }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
