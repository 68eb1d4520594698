use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::project::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SingleProjectResponse {
    pub project: Project,
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, body = SingleProjectResponse),
        (status = 404, description = "No project with this id", body = crate::shared::api::ErrorBody)
    ),
    tag = "projects"
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.find_by_id(id).await {
        Ok(Some(project)) => HttpResponse::Ok().json(SingleProjectResponse { project }),
        Ok(None) => ApiResponse::not_found("Project not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::project::application::ports::outgoing::project_repository::{
        CreateProjectData, ProjectListFilter, ProjectRepository, UpdateProjectData,
    };
    use crate::modules::project::domain::entities::ProjectStatus;
    use crate::shared::storage::StorageError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockFindById {
        result: Result<Option<Project>, StorageError>,
    }

    #[async_trait]
    impl ProjectRepository for MockFindById {
        async fn find_all(
            &self,
            _filter: ProjectListFilter,
        ) -> Result<Vec<Project>, StorageError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Project>, StorageError> {
            self.result.clone()
        }

        async fn create(&self, _data: CreateProjectData) -> Result<Project, StorageError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateProjectData,
        ) -> Result<Project, StorageError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
            unimplemented!()
        }
    }

    fn sample_project(id: Uuid) -> Project {
        let now = chrono::Utc::now();
        Project {
            id,
            title: "Portfolio Website".to_string(),
            description: "Personal portfolio".to_string(),
            long_description: None,
            technologies: vec!["Rust".to_string(), "Actix".to_string()],
            github_url: None,
            live_url: None,
            image_url: None,
            images: vec![],
            featured: false,
            status: ProjectStatus::Completed,
            start_date: None,
            end_date: None,
            category: "Web".to_string(),
            priority: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    async fn found_project_is_wrapped() {
        let id = Uuid::new_v4();
        let state = TestAppStateBuilder::new()
            .with_projects(Arc::new(MockFindById {
                result: Ok(Some(sample_project(id))),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["project"]["id"], id.to_string());
        assert_eq!(json["project"]["technologies"][1], "Actix");
    }

    #[actix_web::test]
    async fn absent_project_is_404() {
        let state = TestAppStateBuilder::new()
            .with_projects(Arc::new(MockFindById { result: Ok(None) }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
    }
}
