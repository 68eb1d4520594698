use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::validation::{validate_query, ContactQueryParams};
use crate::modules::contact::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ContactListResponse {
    pub contacts: Vec<Contact>,
}

#[get("/api/contacts")]
pub async fn get_contacts_handler(
    query: web::Query<ContactQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = validate_query(query.into_inner());

    match data.contacts.find_all(filter).await {
        Ok(contacts) => HttpResponse::Ok().json(ContactListResponse { contacts }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
