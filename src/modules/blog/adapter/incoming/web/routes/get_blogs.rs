use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::validation::{validate_query, BlogQueryParams};
use crate::modules::blog::domain::entities::Blog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
}

#[get("/api/blogs")]
pub async fn get_blogs_handler(
    query: web::Query<BlogQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = validate_query(query.into_inner());

    match data.blogs.find_all(filter).await {
        Ok(blogs) => HttpResponse::Ok().json(BlogListResponse { blogs }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
