use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::validation::{validate_create, CreateBlogRequest};
use crate::modules::blog::domain::entities::Blog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedBlogResponse {
    pub blog: Blog,
}

#[post("/api/blogs")]
pub async fn create_blog_handler(
    req: web::Json<CreateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match validate_create(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.blogs.create(input).await {
        Ok(blog) => HttpResponse::Created().json(CreatedBlogResponse { blog }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::blog::application::ports::outgoing::blog_repository::{
        BlogListFilter, BlogRepository, CreateBlogData, UpdateBlogData,
    };
    use crate::shared::storage::StorageError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct ConflictOnCreate;

    #[async_trait]
    impl BlogRepository for ConflictOnCreate {
        async fn find_all(&self, _filter: BlogListFilter) -> Result<Vec<Blog>, StorageError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Blog>, StorageError> {
            unimplemented!()
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Blog>, StorageError> {
            unimplemented!()
        }

        async fn create(&self, _data: CreateBlogData) -> Result<Blog, StorageError> {
            Err(StorageError::Conflict)
        }

        async fn update(&self, _id: Uuid, _data: UpdateBlogData) -> Result<Blog, StorageError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
            unimplemented!()
        }
    }

    #[actix_web::test]
    async fn duplicate_slug_is_409() {
        let state = TestAppStateBuilder::new()
            .with_blogs(Arc::new(ConflictOnCreate))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_blog_handler),
        )
        .await;

        let body = json!({
            "title": "Shipping a Rust backend",
            "slug": "shipping-a-rust-backend",
            "content": "Lessons learned"
        });

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "DUPLICATE_RESOURCE");
    }

    #[actix_web::test]
    async fn malformed_slug_is_rejected() {
        let state = TestAppStateBuilder::new()
            .with_blogs(Arc::new(ConflictOnCreate))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_blog_handler),
        )
        .await;

        let body = json!({
            "title": "Shipping a Rust backend",
            "slug": "Not A Slug",
            "content": "Lessons learned"
        });

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["details"][0]["field"], "slug");
    }
}
