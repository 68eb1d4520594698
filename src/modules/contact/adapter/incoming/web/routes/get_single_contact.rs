use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SingleContactResponse {
    pub contact: Contact,
}

#[get("/api/contacts/{id}")]
pub async fn get_single_contact_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contacts.find_by_id(id).await {
        Ok(Some(contact)) => HttpResponse::Ok().json(SingleContactResponse { contact }),
        Ok(None) => ApiResponse::not_found("Contact not found"),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
