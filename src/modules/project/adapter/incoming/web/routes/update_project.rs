use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::project::application::validation::{validate_update, UpdateProjectRequest};
use crate::modules::project::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UpdatedProjectResponse {
    pub project: Project,
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, body = UpdatedProjectResponse),
        (status = 400, body = crate::shared::api::ErrorBody),
        (status = 404, body = crate::shared::api::ErrorBody)
    ),
    tag = "projects"
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let input = match validate_update(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.projects.update(id, input).await {
        Ok(project) => HttpResponse::Ok().json(UpdatedProjectResponse { project }),
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

    use crate::modules::project::application::ports::outgoing::project_repository::{
        CreateProjectData, ProjectListFilter, ProjectRepository, UpdateProjectData,
    };
    use crate::shared::storage::StorageError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockUpdate {
        result: Result<Project, StorageError>,
    }

    #[async_trait]
    impl ProjectRepository for MockUpdate {
        async fn find_all(
            &self,
            _filter: ProjectListFilter,
        ) -> Result<Vec<Project>, StorageError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Project>, StorageError> {
            unimplemented!()
        }

        async fn create(&self, _data: CreateProjectData) -> Result<Project, StorageError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateProjectData,
        ) -> Result<Project, StorageError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
            unimplemented!()
        }
    }

    #[actix_web::test]
    async fn update_on_missing_id_is_404() {
        let state = TestAppStateBuilder::new()
            .with_projects(Arc::new(MockUpdate {
                result: Err(StorageError::NotFound),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .set_json(json!({"featured": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn invalid_partial_body_is_400() {
        let state = TestAppStateBuilder::new()
            .with_projects(Arc::new(MockUpdate {
                result: Err(StorageError::NotFound),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .set_json(json!({"technologies": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["details"][0]["field"], "technologies");
    }
}
