use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::validation::{validate_create, CreateContactRequest};
use crate::modules::contact::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedContactResponse {
    pub contact: Contact,
}

#[post("/api/contacts")]
pub async fn create_contact_handler(
    req: web::Json<CreateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match validate_create(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.contacts.create(input).await {
        Ok(contact) => HttpResponse::Created().json(CreatedContactResponse { contact }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
