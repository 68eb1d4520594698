use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::experience::application::validation::{
    validate_create, CreateExperienceRequest,
};
use crate::modules::experience::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedExperienceResponse {
    pub experience: Experience,
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match validate_create(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.experiences.create(input).await {
        Ok(experience) => HttpResponse::Created().json(CreatedExperienceResponse { experience }),
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

    use crate::modules::experience::application::ports::outgoing::experience_repository::{
        CreateExperienceData, ExperienceListFilter, ExperienceRepository, UpdateExperienceData,
    };
    use crate::shared::storage::StorageError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct EchoCreate;

    #[async_trait]
    impl ExperienceRepository for EchoCreate {
        async fn find_all(
            &self,
            _filter: ExperienceListFilter,
        ) -> Result<Vec<Experience>, StorageError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Experience>, StorageError> {
            unimplemented!()
        }

        async fn create(&self, data: CreateExperienceData) -> Result<Experience, StorageError> {
            let now = chrono::Utc::now();
            Ok(Experience {
                id: Uuid::new_v4(),
                title: data.title,
                company: data.company,
                location: data.location,
                description: data.description,
                start_date: data.start_date,
                end_date: data.end_date,
                current: data.current,
                kind: data.kind,
                logo_url: data.logo_url,
                company_url: data.company_url,
                achievements: data.achievements,
                created_at: now,
                updated_at: now,
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateExperienceData,
        ) -> Result<Experience, StorageError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
            unimplemented!()
        }
    }

    #[actix_web::test]
    async fn current_position_is_created_without_end_date() {
        let state = TestAppStateBuilder::new()
            .with_experiences(Arc::new(EchoCreate))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_experience_handler),
        )
        .await;

        let body = json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "description": "Built the billing pipeline",
            "startDate": "2023-01-09T00:00:00Z",
            "endDate": "2024-06-01T00:00:00Z",
            "current": true
        });

        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["experience"]["current"], true);
        assert!(json["experience"]["endDate"].is_null());
        assert_eq!(json["experience"]["type"], "FULL_TIME");
    }
}
