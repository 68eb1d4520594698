use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::validation::{validate_update, UpdateContactRequest};
use crate::modules::contact::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UpdatedContactResponse {
    pub contact: Contact,
}

#[put("/api/contacts/{id}")]
pub async fn update_contact_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = match validate_update(req.into_inner()) {
        Ok(input) => input,
        Err(details) => return ApiResponse::validation_failed(details),
    };

    match data.contacts.update(id, input).await {
        Ok(contact) => HttpResponse::Ok().json(UpdatedContactResponse { contact }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
